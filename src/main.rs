#![allow(warnings)]
//! To-Do App Frontend Entry Point

mod models;
mod tasklist;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
