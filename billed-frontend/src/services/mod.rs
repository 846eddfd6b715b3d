pub mod http_store;
pub mod identity;
pub mod memory_store;
pub mod navigation;
pub mod resource_client;

pub use http_store::HttpResourceClient;
pub use identity::{IdentityProvider, LocalStorage, StaticIdentity, StoredIdentity};
pub use memory_store::MemoryResourceClient;
pub use navigation::{FnNavigator, FnReceiptPreview, Navigator, ReceiptPreview};
pub use resource_client::{CreateBill, ReceiptUpload, ResourceClient};
