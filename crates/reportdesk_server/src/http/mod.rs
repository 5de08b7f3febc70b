pub(crate) mod middleware;
pub(crate) mod projects;
pub(crate) mod reports;
pub(crate) mod response;
