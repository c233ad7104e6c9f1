pub mod compare;
pub mod compute;
pub mod history;

use std::path::Path;

use gridwalk_core::{Move, PathRequest};

/// Read a request file in the HTTP body shape and validate its commands
pub fn load_request(
    path: &Path,
) -> Result<(PathRequest, Vec<Move>), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let request: PathRequest = serde_json::from_str(&raw)
        .map_err(|e| format!("invalid request in {}: {}", path.display(), e))?;
    let moves = request.validate()?;
    Ok((request, moves))
}

/// Open a database file and bring its schema up to date
pub fn open_store(path: &Path) -> Result<rusqlite::Connection, Box<dyn std::error::Error>> {
    let mut conn = gridwalk_store::db::open(path)?;
    gridwalk_store::db::configure(&conn)?;
    gridwalk_store::migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}
