//! Localized error messages.
//!
//! Only failures are translated; success output (ids, dates, counts) is the
//! same in every locale.

use vaxtrace_core::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

impl Locale {
    /// Resolve the locale from the program's first argument: `pt` selects
    /// Portuguese, anything else (or nothing) selects English.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        match args.next().as_deref() {
            Some("pt") => Locale::Portuguese,
            _ => Locale::English,
        }
    }

    /// Render a domain error as the message the interpreter prints.
    pub fn message(&self, error: &DomainError) -> String {
        let pt = matches!(self, Locale::Portuguese);
        match error {
            DomainError::InvalidDate => pick(pt, "data inválida", "invalid date"),
            DomainError::InvalidBatchId(_) => pick(pt, "lote inválido", "invalid batch"),
            DomainError::InvalidName(_) => pick(pt, "nome inválido", "invalid name"),
            DomainError::CapacityExceeded => {
                pick(pt, "demasiadas vacinas", "too many vaccines")
            }
            DomainError::DuplicateBatchId => {
                pick(pt, "número de lote duplicado", "duplicate batch number")
            }
            DomainError::InvalidQuantity => pick(pt, "quantidade inválida", "invalid quantity"),
            DomainError::AlreadyVaccinatedToday => pick(pt, "já vacinado", "already vaccinated"),
            DomainError::OutOfStock => pick(pt, "esgotado", "no stock"),
            DomainError::OutOfMemory => pick(pt, "sem memória", "no memory"),
            DomainError::NoSuchBatch(id) => {
                if pt {
                    format!("{id}: lote inexistente")
                } else {
                    format!("{id}: no such batch")
                }
            }
            DomainError::NoSuchUser(user) => {
                if pt {
                    format!("{user}: utente inexistente")
                } else {
                    format!("{user}: no such user")
                }
            }
            DomainError::NoSuchVaccine(name) => {
                if pt {
                    format!("{name}: vacina inexistente")
                } else {
                    format!("{name}: no such vaccine")
                }
            }
        }
    }
}

fn pick(pt: bool, portuguese: &str, english: &str) -> String {
    if pt { portuguese } else { english }.to_owned()
}
