pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod input;
pub mod label;
pub mod spinner;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use input::*;
pub use label::*;
pub use spinner::*;
