//! Named algebras as doubling towers over a scalar backing `S`.
//!
//! Every alias is one definition shared by all five backings:
//! `Complex<i64>`, `Quaternion<RBig>`, `Grassmann3<BigFloat>` and so on.

use crate::{Elliptic, Grassmann, Hyperbolic, Pair, Parabolic};

// Level 1
pub type Complex<S> = Pair<S, Elliptic>;
pub type Perplex<S> = Pair<S, Hyperbolic>;
pub type Nilplex<S> = Pair<S, Parabolic>;

/// ℚ(√−D) for a Heegner number D. `Heegner<S, 1>` is `Complex<S>`.
pub type Heegner<S, const D: u64> = Pair<S, Elliptic<D>>;

// Cayley–Dickson
pub type Quaternion<S> = Pair<Complex<S>, Elliptic>;
pub type Octonion<S> = Pair<Quaternion<S>, Elliptic>;

// Commutative level-2 and level-3 towers
pub type Bicomplex<S> = Pair<Complex<S>, Hyperbolic>;
pub type Biperplex<S> = Pair<Perplex<S>, Hyperbolic>;
pub type Binplex<S> = Pair<Nilplex<S>, Parabolic>;
pub type Tricomplex<S> = Pair<Bicomplex<S>, Hyperbolic>;
pub type Triperplex<S> = Pair<Biperplex<S>, Hyperbolic>;
pub type Trinplex<S> = Pair<Binplex<S>, Parabolic>;

// Grassmann numbers; level 1 coincides with the nilplex numbers.
pub type Grassmann2<S> = Pair<Nilplex<S>, Grassmann>;
/// Three nilpotent generators, but only `e2` anti-commutes with `e3`;
/// `e1` and `e3` commute, so `(e1 + e3)^2 = 2·e1·e3`.
pub type Grassmann3<S> = Pair<Grassmann2<S>, Grassmann>;
pub type Grassmann4<S> = Pair<Grassmann3<S>, Grassmann>;
