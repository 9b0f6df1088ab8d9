#![allow(warnings)]
//! Product Status Board Frontend Entry Point

mod models;
mod error;
mod stock;
mod query_cache;
mod lifetime;
mod optimistic;
mod pagination;
mod query_params;
mod commands;
mod context;
mod store;
mod queries;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
