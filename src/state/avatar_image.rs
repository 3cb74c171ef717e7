//! Image load state for avatars.
//!
//! An avatar starts on its image when it has one. A load failure switches it
//! to the initials label for the rest of the instance's life; there is no
//! retry and no way back.

#[cfg(test)]
#[path = "avatar_image_test.rs"]
mod avatar_image_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvatarImage {
    src: Option<String>,
    failed: bool,
}

/// Which of the two avatar layers is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvatarVisibility {
    pub image: bool,
    pub fallback: bool,
}

impl AvatarImage {
    /// Blank sources count as no image.
    pub fn new(src: Option<&str>) -> Self {
        let src = src.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned);
        Self { src, failed: false }
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Record a load failure. Returns `true` only on the first failure.
    pub fn mark_failed(&mut self) -> bool {
        if self.failed || self.src.is_none() {
            return false;
        }
        self.failed = true;
        true
    }

    /// True for an `<img>` that finished loading without any pixels, i.e. a
    /// failure whose `error` event may already have fired.
    pub fn settled_broken(complete: bool, natural_width: u32) -> bool {
        complete && natural_width == 0
    }

    pub fn shows_image(&self) -> bool {
        self.src.is_some() && !self.failed
    }

    pub fn visibility(&self) -> AvatarVisibility {
        let image = self.shows_image();
        AvatarVisibility { image, fallback: !image }
    }
}
