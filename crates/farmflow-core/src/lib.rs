//! Core types and trait definitions for the FarmFlow record store.
//!
//! This crate is deliberately free of HTTP and database dependencies. It
//! describes the twelve-table farm schema as closed enumerations, the scalar
//! values that flow in and out of it, and the [`store::FarmStore`] trait that
//! storage backends implement.

#![allow(async_fn_in_trait)]

pub mod column_map;
pub mod error;
pub mod record;
pub mod report;
pub mod schema;
pub mod store;
pub mod value;

pub use column_map::ColumnMap;
pub use error::{Classify, Error, FailureKind, Result};
pub use schema::{Column, ColumnType, Table};
pub use value::{Row, Value};
