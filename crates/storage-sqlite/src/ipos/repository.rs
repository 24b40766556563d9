use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use ipotracker_core::ipos::{Ipo, IpoRepositoryTrait, NewIpo};
use ipotracker_core::Result;

use super::model::{IpoDB, NewIpoDB};
use crate::db::get_connection;
use crate::errors::IntoCore;
use crate::schema::ipos;

/// Repository for managing IPO records in the database
pub struct IpoRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl IpoRepository {
    /// Creates a new IpoRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl IpoRepositoryTrait for IpoRepository {
    fn list(&self) -> Result<Vec<Ipo>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = ipos::table
            .select(IpoDB::as_select())
            .order(ipos::id.asc())
            .load::<IpoDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(Ipo::from).collect())
    }

    fn delete_all(&self) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        diesel::delete(ipos::table).execute(&mut conn).into_core()
    }

    fn insert_batch(&self, records: Vec<NewIpo>) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        conn.transaction(|conn| {
            let rows: Vec<NewIpoDB> = records.into_iter().map(NewIpoDB::from).collect();

            diesel::insert_into(ipos::table).values(rows).execute(conn)
        })
        .into_core()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use tempfile::TempDir;

    fn setup() -> (TempDir, IpoRepository) {
        let tmp = TempDir::new().unwrap();
        let db_path = tmp.path().join("test.db");
        let db_path = db_path.to_str().unwrap();
        db::init(db_path).unwrap();
        let pool = db::create_pool(db_path).unwrap();
        db::run_migrations(&pool).unwrap();
        (tmp, IpoRepository::new(pool))
    }

    fn sample(date: &str, name: &str) -> NewIpo {
        NewIpo {
            date: date.to_string(),
            name: name.to_string(),
            issue_size: Some(1000.0),
            qib_subscription: None,
            hni_subscription: None,
            rii_subscription: None,
            total_subscription: None,
            offer_price: Some(100.0),
            list_price: Some(120.0),
            listing_gain_pct: None,
            cmp_bse: None,
            cmp_nse: None,
            current_gain_pct: None,
        }
    }

    #[test]
    fn test_insert_and_list_in_storage_order() {
        let (_tmp, repository) = setup();

        let inserted = repository
            .insert_batch(vec![sample("2024-01-01", "Acme"), sample("2024-02-01", "Globex")])
            .unwrap();
        assert_eq!(inserted, 2);

        let rows = repository.list().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Acme");
        assert_eq!(rows[1].name, "Globex");
        assert!(rows[0].id < rows[1].id);
        assert_eq!(rows[0].issue_size, Some(1000.0));
        assert_eq!(rows[0].qib_subscription, None);
    }

    #[test]
    fn test_delete_all_empties_table() {
        let (_tmp, repository) = setup();

        repository
            .insert_batch(vec![sample("2024-01-01", "Acme")])
            .unwrap();
        let deleted = repository.delete_all().unwrap();

        assert_eq!(deleted, 1);
        assert!(repository.list().unwrap().is_empty());
    }

    #[test]
    fn test_replace_yields_equal_content() {
        let (_tmp, repository) = setup();
        let batch = vec![sample("2024-01-01", "Acme"), sample("2024-02-01", "Globex")];

        repository.insert_batch(batch.clone()).unwrap();
        let first = repository.list().unwrap();

        repository.delete_all().unwrap();
        repository.insert_batch(batch).unwrap();
        let second = repository.list().unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.date, b.date);
            assert_eq!(a.name, b.name);
            assert_eq!(a.offer_price, b.offer_price);
        }
    }

    #[test]
    fn test_ids_are_not_reused_across_reloads() {
        let (_tmp, repository) = setup();

        repository
            .insert_batch(vec![sample("2024-01-01", "Acme")])
            .unwrap();
        let first_id = repository.list().unwrap()[0].id;

        repository.delete_all().unwrap();
        repository
            .insert_batch(vec![sample("2024-01-01", "Acme")])
            .unwrap();
        let second_id = repository.list().unwrap()[0].id;

        assert!(second_id > first_id);
    }

    #[test]
    fn test_empty_batch_inserts_nothing() {
        let (_tmp, repository) = setup();

        let inserted = repository.insert_batch(Vec::new()).unwrap();

        assert_eq!(inserted, 0);
        assert!(repository.list().unwrap().is_empty());
    }
}
