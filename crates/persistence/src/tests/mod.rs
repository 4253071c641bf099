// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use red_curtain_domain::{Movie, MovieId, Rating};

pub fn create_test_movie(id: &str, title: &str) -> Movie {
    Movie::new(
        MovieId::new(id),
        title,
        "https://example.com/poster.jpg",
        "A test film.",
        Rating::new(4).unwrap(),
    )
}
