#![allow(dead_code)]

use medico_service::config::{MedicoConfig, OutputKind};
use medico_service::services::{MemorySink, RegistrationSink};
use medico_service::{AppState, Application};
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use std::io;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub sink: Arc<MemorySink>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Use random port for testing (port 0)
        let config = MedicoConfig {
            common: CoreConfig { port: 0 },
            output: OutputKind::Memory,
            ..MedicoConfig::default()
        };

        let sink = Arc::new(MemorySink::new());
        let app = Application::build(config, AppState::new(sink.clone()))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            sink,
        }
    }
}

/// Router-level state backed by an in-memory sink.
pub fn memory_state() -> (AppState, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (AppState::new(sink.clone()), sink)
}

/// Sink whose writes always fail, e.g. a closed stdout.
pub struct FailingSink;

impl RegistrationSink for FailingSink {
    fn emit(&self, _line: &str) -> io::Result<()> {
        Err(io::Error::other("broken pipe"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

pub fn failing_state() -> AppState {
    AppState::new(Arc::new(FailingSink))
}

pub fn valid_payload() -> Value {
    json!({
        "nome": "Ana",
        "email": "ana@x.com",
        "crm": "12345",
        "especialidade": "CARDIOLOGIA",
        "endereco": {
            "logradouro": "Rua A",
            "bairro": "Centro",
            "cep": "01000000",
            "cidade": "Sao Paulo",
            "uf": "SP",
            "numero": "10",
            "complemento": "Sala 2"
        }
    })
}

pub const VALID_RENDERING: &str = "DadosCadastradoMedico[nome=Ana, email=ana@x.com, crm=12345, \
    especialidade=CARDIOLOGIA, endereco=DadosEndereco[logradouro=Rua A, bairro=Centro, \
    cep=01000000, cidade=Sao Paulo, uf=SP, numero=10, complemento=Sala 2]]";
