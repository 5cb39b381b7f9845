pub mod medico;

pub use medico::{DadosCadastradoMedico, DadosEndereco, Especialidade};
