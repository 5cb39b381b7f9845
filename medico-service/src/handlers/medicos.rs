use axum::extract::State;
use service_core::error::AppError;
use service_core::extract::AppJson;

use crate::dtos::DadosCadastradoMedico;
use crate::services::record_registration;
use crate::startup::AppState;

/// `POST /medicos`: write the decoded registration to the output channel.
///
/// Bodies that do not decode are rejected by [`AppJson`] before this runs.
/// Responds with an empty 200.
#[tracing::instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(dados): AppJson<DadosCadastradoMedico>,
) -> Result<(), AppError> {
    let sink = state.sink.clone();
    let line = dados.to_string();

    // Sinks do blocking I/O; keep it off the async workers.
    tokio::task::spawn_blocking(move || sink.emit(&line))
        .await
        .map_err(|e| {
            AppError::InternalError(anyhow::Error::new(e).context("registration output task failed"))
        })?
        .map_err(|e| {
            AppError::InternalError(
                anyhow::Error::new(e)
                    .context(format!("failed to write registration to {}", state.sink.name())),
            )
        })?;

    record_registration(dados.especialidade());

    tracing::info!(
        crm = %dados.crm(),
        especialidade = %dados.especialidade(),
        "Medico registration received"
    );

    Ok(())
}
