use diesel::prelude::*;

use ipotracker_core::ipos::{Ipo, NewIpo};

/// Database model for IPO records
#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::ipos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct IpoDB {
    pub id: i32,
    pub date: String,
    pub name: String,
    pub issue_size: Option<f64>,
    pub qib_subscription: Option<f64>,
    pub hni_subscription: Option<f64>,
    pub rii_subscription: Option<f64>,
    pub total_subscription: Option<f64>,
    pub offer_price: Option<f64>,
    pub list_price: Option<f64>,
    pub listing_gain_pct: Option<f64>,
    pub cmp_bse: Option<f64>,
    pub cmp_nse: Option<f64>,
    pub current_gain_pct: Option<f64>,
}

/// Insertable model; the id is assigned by SQLite's rowid sequence.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::ipos)]
pub struct NewIpoDB {
    pub date: String,
    pub name: String,
    pub issue_size: Option<f64>,
    pub qib_subscription: Option<f64>,
    pub hni_subscription: Option<f64>,
    pub rii_subscription: Option<f64>,
    pub total_subscription: Option<f64>,
    pub offer_price: Option<f64>,
    pub list_price: Option<f64>,
    pub listing_gain_pct: Option<f64>,
    pub cmp_bse: Option<f64>,
    pub cmp_nse: Option<f64>,
    pub current_gain_pct: Option<f64>,
}

impl From<IpoDB> for Ipo {
    fn from(db: IpoDB) -> Self {
        Ipo {
            id: db.id,
            date: db.date,
            name: db.name,
            issue_size: db.issue_size,
            qib_subscription: db.qib_subscription,
            hni_subscription: db.hni_subscription,
            rii_subscription: db.rii_subscription,
            total_subscription: db.total_subscription,
            offer_price: db.offer_price,
            list_price: db.list_price,
            listing_gain_pct: db.listing_gain_pct,
            cmp_bse: db.cmp_bse,
            cmp_nse: db.cmp_nse,
            current_gain_pct: db.current_gain_pct,
        }
    }
}

impl From<NewIpo> for NewIpoDB {
    fn from(record: NewIpo) -> Self {
        NewIpoDB {
            date: record.date,
            name: record.name,
            issue_size: record.issue_size,
            qib_subscription: record.qib_subscription,
            hni_subscription: record.hni_subscription,
            rii_subscription: record.rii_subscription,
            total_subscription: record.total_subscription,
            offer_price: record.offer_price,
            list_price: record.list_price,
            listing_gain_pct: record.listing_gain_pct,
            cmp_bse: record.cmp_bse,
            cmp_nse: record.cmp_nse,
            current_gain_pct: record.current_gain_pct,
        }
    }
}
