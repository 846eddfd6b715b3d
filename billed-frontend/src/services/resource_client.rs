use crate::error::AppError;
use crate::models::{Bill, BillDraft, StagedFile};
use async_trait::async_trait;

/// Receipt bytes sent along with a new bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl From<&StagedFile> for ReceiptUpload {
    fn from(staged: &StagedFile) -> Self {
        Self {
            file_name: staged.raw_file.name.clone(),
            content_type: staged.raw_file.content_type.clone(),
            data: staged.raw_file.data.clone(),
        }
    }
}

/// Payload of a `create` call.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBill {
    pub draft: BillDraft,
    pub receipt: Option<ReceiptUpload>,
}

/// Accessor for the remote `bills` collection.
///
/// Implementations scope `list` to what the signed-in user may see and report
/// every rejection as [`AppError::Fetch`] carrying a displayable message.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    async fn list(&self) -> Result<Vec<Bill>, AppError>;
    async fn create(&self, request: CreateBill) -> Result<Bill, AppError>;
    async fn update(&self, bill: &Bill) -> Result<Bill, AppError>;
}
