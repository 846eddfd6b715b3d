pub mod bills;
pub mod new_bill;
pub mod review;

pub use bills::{BillsList, BillsPage};
pub use new_bill::{NewBillSubmission, SubmissionState, ALLOWED_EXTENSIONS};
pub use review::{BillReview, Decision};
