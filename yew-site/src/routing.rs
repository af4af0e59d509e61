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

//! Application route definitions.
//!
//! Shared by the `App` switch and the integration tests.

use enum_display::EnumDisplay;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug, EnumDisplay)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[at("/admin/video")]
    VideoAdmin,
    #[not_found]
    #[at("/404")]
    NotFound,
}
