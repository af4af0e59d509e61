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

pub mod config_error;
pub mod contact_form;
pub mod layout;
pub mod product_gallery;
pub mod scene_viewer;
pub mod scrolly_section;
pub mod scrub_hero;
pub mod tablet_demo;
pub mod theater;
pub mod video_upload;
