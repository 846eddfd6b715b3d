/// Views the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutePath {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl RoutePath {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePath::Login => "/",
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
            RoutePath::Dashboard => "#admin/dashboard",
        }
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
