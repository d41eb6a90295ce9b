// SPDX-FileCopyrightText: 2025-2026 Fearefull <todoreminder@fearefull.com>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use strum::IntoEnumIterator;

use crate::{AlarmTitleType, Error, IconRes, Repeat};

/// Entry of the repeat mode picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatItem {
    pub repeat: Repeat,
    pub text: &'static str,
    pub icon: IconRes,
    pub selected: bool,
}

/// Entry of the title type picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmTitleItem {
    pub title_type: AlarmTitleType,
    pub text: &'static str,
    pub icon: IconRes,
    pub selected: bool,
}

/// Source of the lists shown in the alarm editor.
#[async_trait]
pub trait ItemProvider: Send + Sync {
    /// Lists repeat modes with `selected` marking the current one.
    async fn repeat_items_for(&self, selected: Repeat) -> Result<Vec<RepeatItem>, Error>;

    /// Lists title types with `selected` marking the current one.
    async fn title_items_for(
        &self,
        selected: AlarmTitleType,
    ) -> Result<Vec<AlarmTitleItem>, Error>;
}

/// Builds one item per variant.
#[derive(Debug, Default, Clone, Copy)]
pub struct Catalog;

#[async_trait]
impl ItemProvider for Catalog {
    async fn repeat_items_for(&self, selected: Repeat) -> Result<Vec<RepeatItem>, Error> {
        Ok(Repeat::iter()
            .map(|repeat| RepeatItem {
                repeat,
                text: repeat.label(),
                icon: repeat.icon(),
                selected: repeat == selected,
            })
            .collect())
    }

    async fn title_items_for(
        &self,
        selected: AlarmTitleType,
    ) -> Result<Vec<AlarmTitleItem>, Error> {
        Ok(AlarmTitleType::iter()
            .map(|title_type| AlarmTitleItem {
                title_type,
                text: title_type.text(),
                icon: title_type.icon(),
                selected: title_type == selected,
            })
            .collect())
    }
}
