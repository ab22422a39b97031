//! Shared contracts between the Clubdesk frontend and its REST backend:
//! domain records, DTOs, and the list-view logic (filtering, aggregation,
//! selection, form submission) used by every management screen.

pub mod domain;
pub mod shared;
