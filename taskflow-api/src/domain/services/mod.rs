mod projects;

pub use projects::ProjectServiceImpl;
