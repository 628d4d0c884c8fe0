//! HTTP request handlers for the SNP scoring web service

pub mod analyze;
pub mod health;
pub mod info;
