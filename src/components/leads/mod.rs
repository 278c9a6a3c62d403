//! Lead capture screens

mod capture;

pub use capture::CadastroPage;
