pub mod routes;
pub mod table;
