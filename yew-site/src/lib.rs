/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Marketing site for touchless senior-care monitoring.
//!
//! The scroll, video and animation logic lives in `scroll-timeline`; this
//! crate binds it to the browser. The binary entry-point lives in `main.rs`.

pub mod api;
pub mod app;
pub mod components;
pub mod constants;
pub mod context;
pub mod hooks;
pub mod pages;
pub mod routing;
pub mod video;

pub use app::App;
