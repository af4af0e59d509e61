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

//! Static page configuration: story scenes, their video timing, tablet demo
//! scenes and scrolly video sections.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::scene::{Scene, SceneId, SceneTiming};
use crate::tablet::TabletScene;
use crate::timeline::TimelineMapper;
use crate::transition::SectionKind;

const HOME_JSON: &str = include_str!("../data/home.json");

/// A video section observed by the transition controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub id: String,
    pub kind: SectionKind,
    pub src: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub start_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub tagline: String,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneCatalog {
    pub scenes: Vec<Scene>,
    pub timings: Vec<SceneTiming>,
    #[serde(default)]
    pub tablets: Vec<TabletScene>,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl SceneCatalog {
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: SceneCatalog = serde_json::from_str(json)?;
        if catalog.scenes.is_empty() {
            return Err(TimelineError::InvalidConfig(
                "catalog has no scenes".to_string(),
            ));
        }
        Ok(catalog)
    }

    /// The home page catalog shipped with the crate.
    pub fn home() -> Result<Self> {
        Self::from_json(HOME_JSON)
    }

    /// Mapper over the timings, ordered like `scenes`. A scene without a
    /// timing entry gets an empty one, which the mapper treats as "no seek".
    pub fn mapper(&self) -> TimelineMapper {
        let timings = self
            .scenes
            .iter()
            .map(|scene| {
                self.timing(scene.scene).cloned().unwrap_or(SceneTiming {
                    scene: scene.scene,
                    ..Default::default()
                })
            })
            .collect();
        TimelineMapper::new(timings)
    }

    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.scene == id)
    }

    pub fn timing(&self, id: SceneId) -> Option<&SceneTiming> {
        self.timings.iter().find(|timing| timing.scene == id)
    }

    pub fn tablet(&self, id: SceneId) -> Option<&TabletScene> {
        self.tablets.iter().find(|tablet| tablet.scene == id)
    }

    /// Problems worth a warning at load. None of them are fatal.
    pub fn config_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        for scene in &self.scenes {
            match self.timing(scene.scene) {
                None => issues.push(format!("scene {} has no timing", scene.scene)),
                Some(timing) if timing.start_time().is_none() => issues.push(format!(
                    "scene {} has neither videoTime nor checkpoints",
                    scene.scene
                )),
                Some(_) => {}
            }
        }
        for timing in &self.timings {
            if self.scene(timing.scene).is_none() {
                issues.push(format!("timing for unknown scene {}", timing.scene));
            }
        }
        for tablet in &self.tablets {
            issues.extend(
                tablet
                    .config_issues()
                    .into_iter()
                    .map(|issue| format!("tablet scene {}: {issue}", tablet.scene)),
            );
        }
        issues
    }
}
