use std::collections::HashSet;

use log::error;
use rand::Rng;
use rusqlite::{params, Connection, Row};

use crate::error::StoreError;
use crate::models::Element;

/// Highest atomic number the quiz draws from. Nothing past plutonium is
/// ever sampled.
pub const SAMPLE_CEILING: i64 = 94;

/// Decode a row selected with [`Element::COLUMNS`].
pub fn map_row(row: &Row<'_>) -> rusqlite::Result<Element> {
    Element::from_row(row)
}

/// Every element stored under a group number, in storage order. The table
/// view stacks tiles in this order, so no ORDER BY is applied.
///
/// Preparation failures are logged and yield an empty list; a row that does
/// not decode is an error.
pub fn fetch_by_group(conn: &Connection, group: i64) -> Result<Vec<Element>, StoreError> {
    let sql = format!(r#"SELECT {} FROM elements WHERE "groups" = ?1"#, Element::COLUMNS);
    query_elements(conn, &sql, group)
}

/// Look up a single element by atomic number.
pub fn fetch_element(conn: &Connection, id: i64) -> Result<Option<Element>, StoreError> {
    let sql = format!("SELECT {} FROM elements WHERE id = ?1", Element::COLUMNS);
    Ok(query_elements(conn, &sql, id)?.into_iter().next())
}

/// Draw `count` distinct elements from atomic numbers `1..=94`.
pub fn fetch_random_sample(conn: &Connection, count: usize) -> Result<Vec<Element>, StoreError> {
    fetch_random_sample_with(conn, count, &mut rand::thread_rng())
}

/// Same as [`fetch_random_sample`] with a caller-supplied RNG. Results come
/// back in the order the numbers were drawn.
pub fn fetch_random_sample_with<R: Rng + ?Sized>(
    conn: &Connection,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Element>, StoreError> {
    let ids = draw_distinct_ids(count, rng)?;

    let mut elements = Vec::with_capacity(count);
    for id in ids {
        if let Some(element) = fetch_element(conn, id)? {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Pick `count` unique numbers from `1..=SAMPLE_CEILING`, retrying on
/// duplicates. The ceiling check keeps the retry loop finite.
pub fn draw_distinct_ids<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<i64>, StoreError> {
    let available = SAMPLE_CEILING as usize;
    if count > available {
        return Err(StoreError::SampleTooLarge {
            requested: count,
            available,
        });
    }

    let mut seen = HashSet::with_capacity(count);
    let mut ids = Vec::with_capacity(count);
    while ids.len() < count {
        let id = rng.gen_range(1..=SAMPLE_CEILING);
        if seen.insert(id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

fn query_elements(conn: &Connection, sql: &str, key: i64) -> Result<Vec<Element>, StoreError> {
    let mut stmt = match conn.prepare(sql) {
        Ok(stmt) => stmt,
        Err(err) => {
            error!("query is not prepared ({sql}): {err}");
            return Ok(Vec::new());
        }
    };

    let rows = match stmt.query_map(params![key], map_row) {
        Ok(rows) => rows,
        Err(err) => {
            error!("query failed to run ({sql}): {err}");
            return Ok(Vec::new());
        }
    };

    rows.collect::<Result<Vec<_>, _>>().map_err(row_error)
}

/// Split row-stepping failures into bad data and everything else.
fn row_error(err: rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => StoreError::Decode(err),
        other => StoreError::Sqlite(other),
    }
}
