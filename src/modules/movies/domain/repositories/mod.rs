pub mod movie_repository;
