#![cfg_attr(docsrs, feature(doc_cfg))]
//#![warn(missing_docs)]

/*!
 <div align="center">
   <h1>Web Toolbelt for Rust</h1>
   <h3>🧰 A toolbelt of small string, URL and iterator helpers for web applications</h3>

   [![crate](https://img.shields.io/crates/v/web-toolbelt-rs.svg)](https://crates.io/crates/web-toolbelt-rs)
   [![docs](https://docs.rs/web-toolbelt-rs/badge.svg)](https://docs.rs/web-toolbelt-rs)
   ![license](https://shields.io/badge/license-MIT%2FApache--2.0-blue)

  </div>

 # Web Toolbelt for Rust

 **Web Toolbelt** collects the small, stateless helpers that every web-facing
 application ends up writing sooner or later: URL slugs, query-string editing,
 ellipsis truncation, title casing, iterator paging and de-duplication, fluent
 chaining, and random token generation. Each module is an independent leaf with
 no coupling to the others; pick the pieces you need and ignore the rest.

 ## Core Concepts

Understanding these components will help you get started:

- **Slug Generator:** converts free text into a URL/HTML-safe, hyphenated
  lowercase token, splitting camelCase and digit boundaries and folding
  accented characters to ASCII.
- **Query String Builder:** parses an absolute or relative URL and edits its
  query component with `add`/`remove`/`toggle`, preserving parameter order and
  leaving the rest of the URL untouched.
- **String helpers:** head/tail truncation with an ellipsis, title casing,
  HTML and URL encoding.
- **Iterator helpers:** `distinct_by`, `partition_into`, `filter_paging` and
  `join_non_blank` adaptors on any iterator.
- **Fluent helpers:** `tap` and `apply_if` for building chainable APIs on any
  value.

 ## Features

The crate is modular, allowing you to enable only the features you need:

| **Feature** | **Description**                                                      |
|-------------|----------------------------------------------------------------------|
| query       | Enables the `QueryStringBuilder` and URL classification helpers      |
| random      | Enables the seeded random token generator                            |
| datetime    | Enables day-boundary and relative-day helpers for `chrono` datetimes |
| full        | Enables all available features                                       |

 ## Getting Started
 Make sure you activated the suitable features on Cargo.toml:

```toml
[dependencies]
web-toolbelt-rs = { version = "<version>", features = ["<full|query|random|datetime>"] }
```

Then, in your code:

```rust
use web_toolbelt_rs::error::ToolbeltError;
use web_toolbelt_rs::query::QueryStringBuilder;
use web_toolbelt_rs::string::slug::generate_slug;

fn main() -> Result<(), ToolbeltError> {
    let slug = generate_slug("Getting Started with Web Toolbelt");
    assert_eq!(slug, "getting-started-with-web-toolbelt");

    let url = QueryStringBuilder::new("http://domain.com/articles")?
        .add("slug", &slug)
        .add_value("page", 2)
        .to_string();
    assert_eq!(
        url,
        "http://domain.com/articles?slug=getting-started-with-web-toolbelt&page=2"
    );

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.

 ## Contribution
 Unless you explicitly state otherwise, any contribution intentionally submitted
 for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
 dual licensed as above, without any additional terms or conditions

 */

/// String helpers: slugs, truncation, casing and encoding
pub mod string;

/// Error types for toolbelt operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Iterator adaptors: de-duplication, partitioning, paging
pub mod iter;

/// Fluent chaining helpers for any value
pub mod fluent;

#[cfg(feature = "query")]
/// This module provides the query-string builder for absolute and relative URLs.
pub mod query;

#[cfg(feature = "random")]
/// This module provides the seeded random token generator.
pub mod random;

#[cfg(feature = "datetime")]
/// This module provides day-boundary and relative-day helpers for `chrono`.
pub mod datetime;
