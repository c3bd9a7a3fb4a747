// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Recommendation strip shown under entity pages.

use lumen_content_core::HorizonEntry;

const ENTRIES_SHOWN: usize = 3;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

struct Tile {
	title: &'static str,
	text: &'static str,
	url: &'static str,
	image_url: &'static str,
}

const TILES: &[Tile] = &[
	Tile {
		title: "Serlo in Zahlen",
		text: "Wie viele Menschen lernen mit Serlo, und wie viele machen mit?",
		url: "/serlo",
		image_url: "https://de.serlo.org/_assets/img/horizon/serlo-in-zahlen.jpg",
	},
	Tile {
		title: "Werde Autor*in",
		text: "Teile dein Wissen und hilf Schüler*innen beim Lernen.",
		url: "/mitmachen",
		image_url: "https://de.serlo.org/_assets/img/horizon/autorin.jpg",
	},
	Tile {
		title: "Spenden",
		text: "Unterstütze freie Bildung mit einer Spende.",
		url: "/spenden",
		image_url: "https://de.serlo.org/_assets/img/horizon/spenden.jpg",
	},
	Tile {
		title: "Lerntipps",
		text: "So lernst du effektiver und stressfreier.",
		url: "/lerntipps",
		image_url: "https://de.serlo.org/_assets/img/horizon/lerntipps.jpg",
	},
	Tile {
		title: "Jobs bei Serlo",
		text: "Arbeite mit uns an der Zukunft freier Bildung.",
		url: "/jobs",
		image_url: "https://de.serlo.org/_assets/img/horizon/jobs.jpg",
	},
	Tile {
		title: "Newsletter",
		text: "Erfahre als Erste*r von neuen Inhalten und Projekten.",
		url: "/newsletter",
		image_url: "https://de.serlo.org/_assets/img/horizon/newsletter.jpg",
	},
	Tile {
		title: "Serlo für Lehrkräfte",
		text: "Materialien und Ideen für den Unterricht.",
		url: "/lehrkraefte",
		image_url: "https://de.serlo.org/_assets/img/horizon/lehrkraefte.jpg",
	},
	Tile {
		title: "Transparenz",
		text: "Wofür wir unser Geld ausgeben, offen einsehbar.",
		url: "/transparenz",
		image_url: "https://de.serlo.org/_assets/img/horizon/transparenz.jpg",
	},
];

/// Picks three consecutive tiles, starting at an offset derived from the
/// cache key. The same key always yields the same strip.
pub fn create_horizon(cache_key: &str) -> Vec<HorizonEntry> {
	let start = horizon_offset(cache_key);

	TILES
		.iter()
		.cycle()
		.skip(start)
		.take(ENTRIES_SHOWN.min(TILES.len()))
		.map(|tile| HorizonEntry {
			title: tile.title.to_string(),
			text: tile.text.to_string(),
			url: tile.url.to_string(),
			image_url: tile.image_url.to_string(),
		})
		.collect()
}

/// First tile of the strip. FNV-1a keeps the offset stable across builds
/// and toolchains.
fn horizon_offset(cache_key: &str) -> usize {
	let hash = cache_key.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
		(hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
	});
	(hash % TILES.len() as u64) as usize
}
