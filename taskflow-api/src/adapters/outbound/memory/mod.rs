mod projects;

pub use projects::InMemoryProjectRepository;
