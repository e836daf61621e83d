mod chart_repository;
mod dashboard_repository;
mod metadata_store;
