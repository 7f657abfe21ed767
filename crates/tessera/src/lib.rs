//! # Tessera
//!
//! Exact polynomial arithmetic building blocks.
//!
//! ## Features
//!
//! - **Coefficients**: arbitrary precision integers and word-sized prime fields
//! - **Univariate**: dense polynomials, Taylor shift, modular composition
//! - **Multivariate**: bit-packed monomials and the product bound search
//!   used to split sparse products into blocks
//!
//! ## Quick Start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let layout = PackedLayout::new(1, 16, MonomialOrder::Lex).unwrap();
//! let a = PackedMonomials::from_exponents(layout.clone(), [[7u64], [5], [2]]).unwrap();
//! let b = PackedMonomials::from_exponents(layout.clone(), [[4u64], [1]]).unwrap();
//!
//! let bound = search_monomials(&a.view(), &b.view(), 3, 4);
//! assert_eq!(layout.unpack(&bound.exp), vec![8]);
//! assert_eq!(bound.score, 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tessera_integers as integers;
pub use tessera_mpoly as mpoly;
pub use tessera_poly as poly;
pub use tessera_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tessera_integers::{Integer, ModInt};
    pub use tessera_mpoly::{
        search_monomials, MonomialError, MonomialOrder, PackedLayout, PackedMonomials, ProductBound,
        SortedMonomials,
    };
    pub use tessera_poly::DensePoly;
    pub use tessera_rings::{Field, FiniteField, Ring, Z};
}
