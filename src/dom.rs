//! Document scan: locate eligible images and plan source rewrites.
//!
//! The scan reads every `img[srcset]` element, runs parse and selection
//! against one shared viewport snapshot, and emits a rewrite plan. Writing
//! the chosen source back to the element stays with the caller; an entry
//! with `chosen: None` means the image's existing source is left untouched.

use crate::probe::{capture_viewport, RuntimeProbe};
use crate::{parse_srcset, select_best, Result, Viewport};
use log::{debug, trace};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

/// One planned source assignment for an image element, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRewrite {
    /// The raw candidate attribute as found on the element
    pub srcset: String,
    /// The element's current `src`, if any
    pub current_src: Option<String>,
    /// Winning source to apply, or `None` to leave the element untouched
    pub chosen: Option<String>,
}

/// Scan an HTML string for images carrying a `srcset` attribute.
pub fn scan_document(html: &str, viewport: &Viewport, base: Option<&Url>) -> Vec<ImageRewrite> {
    let document = Html::parse_document(html);
    scan(&document, viewport, base)
}

/// Scan an already-parsed document.
///
/// Images are processed one at a time in document order; each gets a fresh
/// candidate set evaluated against the same viewport snapshot.
pub fn scan(document: &Html, viewport: &Viewport, base: Option<&Url>) -> Vec<ImageRewrite> {
    let img_sel = Selector::parse("img[srcset]").unwrap();

    let mut rewrites = Vec::new();
    for img in document.select(&img_sel) {
        let srcset = img.value().attr("srcset").unwrap_or_default();
        let candidates = parse_srcset(srcset);
        trace!("parsed {} candidate(s) from {:?}", candidates.len(), srcset);

        let chosen = select_best(candidates, viewport).map(|c| resolve(&c.source, base));
        rewrites.push(ImageRewrite {
            srcset: srcset.to_string(),
            current_src: img.value().attr("src").map(str::to_string),
            chosen,
        });
    }

    debug!(
        "scanned {} image(s) at {}x{} ratio {}",
        rewrites.len(),
        viewport.width,
        viewport.height,
        viewport.pixel_ratio
    );
    rewrites
}

/// Probe-driven entry point: skip entirely when the runtime has native
/// support, otherwise capture a viewport and scan.
pub fn scan_with_probe(
    probe: &dyn RuntimeProbe,
    html: &str,
    base: Option<&Url>,
) -> Result<Vec<ImageRewrite>> {
    if probe.supports_native_srcset() {
        debug!("native srcset support detected, skipping fallback scan");
        return Ok(Vec::new());
    }
    let viewport = capture_viewport(probe)?;
    Ok(scan_document(html, &viewport, base))
}

fn resolve(source: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) => base
            .join(source)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| source.to_string()),
        None => source.to_string(),
    }
}
