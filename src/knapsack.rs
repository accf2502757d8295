mod error;
pub mod generate;
mod import;
mod item;

pub use error::{ImportError, InstanceError};
pub use generate::{Generate, UniformItems};
pub use import::{import_csv, read_csv};
pub use item::{Item, KnapsackInstance};
