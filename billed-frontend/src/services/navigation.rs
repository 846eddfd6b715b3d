//! Ports to the view layer.

use crate::models::RoutePath;

/// Swaps the visible view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: RoutePath);
}

/// Shows a receipt inside the modal overlay.
pub trait ReceiptPreview: Send + Sync {
    fn show(&self, url: &str);
}

/// Adapts an `onNavigate`-style callback.
pub struct FnNavigator<F>(pub F);

impl<F> Navigator for FnNavigator<F>
where
    F: Fn(RoutePath) + Send + Sync,
{
    fn navigate(&self, path: RoutePath) {
        (self.0)(path)
    }
}

pub struct FnReceiptPreview<F>(pub F);

impl<F> ReceiptPreview for FnReceiptPreview<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn show(&self, url: &str) {
        (self.0)(url)
    }
}
