pub mod bill;
pub mod event;
pub mod routes;
pub mod user;

pub use bill::{Bill, BillDraft, BillStatus, DisplayBill};
pub use event::{BillForm, FileChangeEvent, IconElement, SelectedFile, StagedFile, SubmitEvent};
pub use routes::RoutePath;
pub use user::{User, UserType};
