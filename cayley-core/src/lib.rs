pub mod algebra;
pub mod algebras;
pub mod bigfloat;
pub mod config;
pub mod display;
pub mod doubling;
pub mod error;
pub mod mobius;
pub mod pair;
pub mod scalar;

pub use algebra::{Algebra, Commutative, Hodge};
pub use algebras::{
    Bicomplex, Binplex, Biperplex, Complex, Grassmann2, Grassmann3, Grassmann4, Heegner,
    Nilplex, Octonion, Perplex, Quaternion, Tricomplex, Trinplex, Triperplex,
};
pub use bigfloat::{BigFloat, RoundingMode};
pub use config::{
    get_algebra_config, AlgebraConfig, ALGEBRA_CONFIGS, HEEGNER_CONFIGS, OCTONION_CONFIG,
    QUATERNION_CONFIG,
};
pub use display::{DisplayWith, ScalarFormat, Units};
pub use doubling::{
    is_heegner, Doubling, Elliptic, Grassmann, Hyperbolic, Parabolic, HEEGNER_NUMBERS,
};
pub use error::{AlgebraError, AlgebraResult};
pub use mobius::Mobius;
pub use pair::Pair;
pub use scalar::{rational, Scalar, Sign};
