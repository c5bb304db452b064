//! Algebra configuration registry.
//!
//! One static entry per named algebra: its identifier, dimension, the σ of
//! each doubling level (innermost first), conventional unit names and the
//! expected classification. Display tables are built from these through
//! [`Units::from_config`](crate::Units::from_config).

/// Static description of a named algebra.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgebraConfig {
    /// Unique identifier used for lookup
    pub id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Number of real coordinates
    pub dimension: usize,
    /// Structural sign of each level, innermost first
    pub sigmas: &'static [i64],
    /// Names of the non-real units, in flat coordinate order
    pub units: &'static [&'static str],
    pub commutative: bool,
    pub associative: bool,
}

pub static COMPLEX_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "complex",
    display_name: "Complex numbers",
    dimension: 2,
    sigmas: &[-1],
    units: &["i"],
    commutative: true,
    associative: true,
};

pub static PERPLEX_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "perplex",
    display_name: "Perplex (split-complex) numbers",
    dimension: 2,
    sigmas: &[1],
    units: &["j"],
    commutative: true,
    associative: true,
};

pub static NILPLEX_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "nilplex",
    display_name: "Nilplex (dual) numbers",
    dimension: 2,
    sigmas: &[0],
    units: &["ε"],
    commutative: true,
    associative: true,
};

pub static QUATERNION_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "quaternion",
    display_name: "Quaternions",
    dimension: 4,
    sigmas: &[-1, -1],
    units: &["i", "j", "k"],
    commutative: false,
    associative: true,
};

pub static OCTONION_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "octonion",
    display_name: "Octonions",
    dimension: 8,
    sigmas: &[-1, -1, -1],
    units: &["i", "j", "k", "l", "il", "jl", "kl"],
    commutative: false,
    associative: false,
};

pub static BICOMPLEX_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "bicomplex",
    display_name: "Bicomplex numbers",
    dimension: 4,
    sigmas: &[-1, 1],
    units: &["i", "j", "ij"],
    commutative: true,
    associative: true,
};

pub static BIPERPLEX_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "biperplex",
    display_name: "Biperplex numbers",
    dimension: 4,
    sigmas: &[1, 1],
    units: &["j", "k", "jk"],
    commutative: true,
    associative: true,
};

pub static BINPLEX_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "binplex",
    display_name: "Binplex numbers",
    dimension: 4,
    sigmas: &[0, 0],
    units: &["ε", "η", "εη"],
    commutative: true,
    associative: true,
};

pub static TRICOMPLEX_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "tricomplex",
    display_name: "Tricomplex numbers",
    dimension: 8,
    sigmas: &[-1, 1, 1],
    units: &["i", "j", "ij", "k", "ik", "jk", "ijk"],
    commutative: true,
    associative: true,
};

pub static TRIPERPLEX_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "triperplex",
    display_name: "Triperplex numbers",
    dimension: 8,
    sigmas: &[1, 1, 1],
    units: &["j", "k", "jk", "l", "jl", "kl", "jkl"],
    commutative: true,
    associative: true,
};

pub static TRINPLEX_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "trinplex",
    display_name: "Trinplex numbers",
    dimension: 8,
    sigmas: &[0, 0, 0],
    units: &["ε", "η", "εη", "ζ", "εζ", "ηζ", "εηζ"],
    commutative: true,
    associative: true,
};

pub static GRASSMANN2_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "grassmann2",
    display_name: "Grassmann numbers, two generators",
    dimension: 4,
    sigmas: &[0, 0],
    units: &["e1", "e2", "e12"],
    commutative: false,
    associative: true,
};

pub static GRASSMANN3_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "grassmann3",
    display_name: "Grassmann numbers, three generators",
    dimension: 8,
    sigmas: &[0, 0, 0],
    units: &["e1", "e2", "e12", "e3", "e13", "e23", "e123"],
    commutative: false,
    associative: true,
};

pub static GRASSMANN4_CONFIG: AlgebraConfig = AlgebraConfig {
    id: "grassmann4",
    display_name: "Grassmann numbers, four generators",
    dimension: 16,
    sigmas: &[0, 0, 0, 0],
    units: &[
        "e1", "e2", "e12", "e3", "e13", "e23", "e123", "e4", "e14", "e24", "e124", "e34", "e134",
        "e234", "e1234",
    ],
    commutative: false,
    associative: true,
};

macro_rules! heegner_config {
    ($d:literal) => {
        AlgebraConfig {
            id: concat!("heegner", $d),
            display_name: concat!("Imaginary quadratic field Q(√-", $d, ")"),
            dimension: 2,
            sigmas: &[-$d],
            units: &[concat!("√-", $d)],
            commutative: true,
            associative: true,
        }
    };
}

/// The nine class-number-one fields, in the order of
/// [`HEEGNER_NUMBERS`](crate::HEEGNER_NUMBERS).
pub static HEEGNER_CONFIGS: [AlgebraConfig; 9] = [
    heegner_config!(1),
    heegner_config!(2),
    heegner_config!(3),
    heegner_config!(7),
    heegner_config!(11),
    heegner_config!(19),
    heegner_config!(43),
    heegner_config!(67),
    heegner_config!(163),
];

/// Every named algebra except the Heegner fields.
pub static ALGEBRA_CONFIGS: [&AlgebraConfig; 14] = [
    &COMPLEX_CONFIG,
    &PERPLEX_CONFIG,
    &NILPLEX_CONFIG,
    &QUATERNION_CONFIG,
    &OCTONION_CONFIG,
    &BICOMPLEX_CONFIG,
    &BIPERPLEX_CONFIG,
    &BINPLEX_CONFIG,
    &TRICOMPLEX_CONFIG,
    &TRIPERPLEX_CONFIG,
    &TRINPLEX_CONFIG,
    &GRASSMANN2_CONFIG,
    &GRASSMANN3_CONFIG,
    &GRASSMANN4_CONFIG,
];

/// Look up an algebra configuration by ID, Heegner fields included.
pub fn get_algebra_config(id: &str) -> Option<&'static AlgebraConfig> {
    ALGEBRA_CONFIGS
        .iter()
        .copied()
        .chain(HEEGNER_CONFIGS.iter())
        .find(|config| config.id == id)
}
