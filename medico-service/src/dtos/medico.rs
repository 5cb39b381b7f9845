//! Payload of `POST /medicos`.
//!
//! Values are immutable once decoded: fields are private and only exposed
//! through accessors. `Display` renders the record form written to the
//! output channel, e.g. `DadosCadastradoMedico[nome=Ana, ...]`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Medical specialty. Closed set; any other value fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Especialidade {
    Ortopedia,
    Cardiologia,
    Ginecologia,
    Dermatologia,
}

impl Especialidade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Especialidade::Ortopedia => "ORTOPEDIA",
            Especialidade::Cardiologia => "CARDIOLOGIA",
            Especialidade::Ginecologia => "GINECOLOGIA",
            Especialidade::Dermatologia => "DERMATOLOGIA",
        }
    }
}

impl fmt::Display for Especialidade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address sub-structure, kept as received.
///
/// Its shape is owned by the address module, so any JSON object is accepted
/// and passed through untouched. Keys keep their wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DadosEndereco(Map<String, Value>);

impl DadosEndereco {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DadosEndereco {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DadosEndereco[")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Value::String(s) => write!(f, "{}={}", key, s)?,
                other => write!(f, "{}={}", key, other)?,
            }
        }
        f.write_str("]")
    }
}

/// Doctor registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DadosCadastradoMedico {
    nome: String,
    email: String,
    crm: String,
    especialidade: Especialidade,
    endereco: DadosEndereco,
}

impl DadosCadastradoMedico {
    pub fn new(
        nome: impl Into<String>,
        email: impl Into<String>,
        crm: impl Into<String>,
        especialidade: Especialidade,
        endereco: DadosEndereco,
    ) -> Self {
        Self {
            nome: nome.into(),
            email: email.into(),
            crm: crm.into(),
            especialidade,
            endereco,
        }
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    /// Not checked for e-mail shape.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Professional registration code (CRM).
    pub fn crm(&self) -> &str {
        &self.crm
    }

    pub fn especialidade(&self) -> Especialidade {
        self.especialidade
    }

    pub fn endereco(&self) -> &DadosEndereco {
        &self.endereco
    }
}

impl fmt::Display for DadosCadastradoMedico {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DadosCadastradoMedico[nome={}, email={}, crm={}, especialidade={}, endereco={}]",
            self.nome, self.email, self.crm, self.especialidade, self.endereco
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
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
                "numero": "10"
            }
        })
    }

    #[test]
    fn decodes_wire_payload() {
        let dados: DadosCadastradoMedico = serde_json::from_value(payload()).unwrap();

        assert_eq!(dados.nome(), "Ana");
        assert_eq!(dados.email(), "ana@x.com");
        assert_eq!(dados.crm(), "12345");
        assert_eq!(dados.especialidade(), Especialidade::Cardiologia);
        assert_eq!(dados.endereco().get("cidade"), Some(&json!("Sao Paulo")));
        assert_eq!(dados.endereco().get("complemento"), None);
        assert_eq!(dados.endereco().len(), 6);
    }

    #[test]
    fn renders_as_record() {
        let dados: DadosCadastradoMedico = serde_json::from_value(payload()).unwrap();

        assert_eq!(
            dados.to_string(),
            "DadosCadastradoMedico[nome=Ana, email=ana@x.com, crm=12345, \
             especialidade=CARDIOLOGIA, endereco=DadosEndereco[logradouro=Rua A, \
             bairro=Centro, cep=01000000, cidade=Sao Paulo, uf=SP, numero=10]]"
        );
    }

    #[test]
    fn accepts_empty_address() {
        let mut body = payload();
        body["endereco"] = json!({});

        let dados: DadosCadastradoMedico = serde_json::from_value(body).unwrap();
        assert!(dados.endereco().is_empty());
        assert!(dados.to_string().ends_with("endereco=DadosEndereco[]]"));
    }

    #[test]
    fn address_passes_through_any_shape() {
        let mut body = payload();
        body["endereco"] = json!({"rua": "X", "numero": 10, "complemento": null});

        let dados: DadosCadastradoMedico = serde_json::from_value(body).unwrap();
        assert_eq!(dados.endereco().get("numero"), Some(&json!(10)));
        assert!(dados
            .to_string()
            .ends_with("endereco=DadosEndereco[rua=X, numero=10, complemento=null]]"));
    }

    #[test]
    fn address_must_be_an_object() {
        let mut body = payload();
        body["endereco"] = json!("Rua A, 10");

        assert!(serde_json::from_value::<DadosCadastradoMedico>(body).is_err());
    }

    #[test]
    fn rejects_unknown_specialty() {
        let mut body = payload();
        body["especialidade"] = json!("PEDIATRIA");

        let err = serde_json::from_value::<DadosCadastradoMedico>(body).unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn specialty_is_case_sensitive() {
        assert!(serde_json::from_value::<Especialidade>(json!("cardiologia")).is_err());
    }

    #[test]
    fn rejects_missing_required_field() {
        let mut body = payload();
        body.as_object_mut().unwrap().remove("crm");

        let err = serde_json::from_value::<DadosCadastradoMedico>(body).unwrap_err();
        assert!(err.to_string().contains("crm"));
    }

    #[test]
    fn ignores_unknown_keys() {
        let mut body = payload();
        body["telefone"] = json!("11999999999");

        assert!(serde_json::from_value::<DadosCadastradoMedico>(body).is_ok());
    }

    #[test]
    fn specialty_wire_names_match_display() {
        for especialidade in [
            Especialidade::Ortopedia,
            Especialidade::Cardiologia,
            Especialidade::Ginecologia,
            Especialidade::Dermatologia,
        ] {
            assert_eq!(
                serde_json::to_value(especialidade).unwrap(),
                json!(especialidade.to_string())
            );
        }
    }
}
