/// A 2D vector used for position and velocity.
///
/// Vectors are plain values: every operation returns a new vector and
/// nothing is modified in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

fn sqrt(value: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        value.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrt(value)
    }
}

fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        y.atan2(x)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::atan2(y, x)
    }
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn plus(&self, other: &Vector2D) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn minus(&self, other: &Vector2D) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub fn magnitude(&self) -> f64 {
        sqrt(self.x * self.x + self.y * self.y)
    }

    /// Scales the vector so its magnitude equals `length`.
    ///
    /// A zero vector stays zero whatever `length` is asked for.
    pub fn normalize_to(&self, length: f64) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / mag * length, self.y / mag * length)
    }

    pub fn normalize(&self) -> Self {
        self.normalize_to(1.0)
    }

    pub fn distance(&self, other: &Vector2D) -> f64 {
        self.minus(other).magnitude()
    }

    /// Orientation of the vector in radians, as used to rotate a sprite.
    pub fn heading(&self) -> f64 {
        atan2(self.y, self.x)
    }

    /// Componentwise mean of the given vectors, `None` when there are none.
    pub fn arithmetic_mean<I>(vectors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2D>,
    {
        let (sum, count) = vectors
            .into_iter()
            .fold((Self::ZERO, 0usize), |(sum, count), v| (sum + v, count + 1));

        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Folds the vector back into `[0, x_limit) x [0, y_limit)`.
    ///
    /// Each axis is handled in two steps: a coordinate at or past its limit
    /// has the limit subtracted once, then a coordinate that is still
    /// negative becomes `limit - coordinate`. This is not a modulo: `-5`
    /// ends up at `limit + 5`.
    pub fn wrap_around(&self, x_limit: f64, y_limit: f64) -> Self {
        Self::new(wrap_axis(self.x, x_limit), wrap_axis(self.y, y_limit))
    }

    /// Vectors from `vectors` lying within `distance` (inclusive) of `from`.
    pub fn within_distance_of<'a, I>(
        vectors: I,
        from: &'a Vector2D,
        distance: f64,
    ) -> impl Iterator<Item = Vector2D> + 'a
    where
        I: IntoIterator<Item = Vector2D>,
        I::IntoIter: 'a,
    {
        vectors
            .into_iter()
            .filter(move |v| v.distance(from) <= distance)
    }
}

fn wrap_axis(coordinate: f64, limit: f64) -> f64 {
    let wrapped = if coordinate >= limit {
        coordinate - limit
    } else {
        coordinate
    };
    if wrapped < 0.0 {
        limit - wrapped
    } else {
        wrapped
    }
}

/// Clamps `value` to at most `|max_abs|` in magnitude, keeping its sign.
pub fn sign_sensitive_max(value: f64, max_abs: f64) -> f64 {
    let bound = if max_abs < 0.0 { -max_abs } else { max_abs };
    if value > 0.0 {
        value.min(bound)
    } else {
        value.max(-bound)
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.plus(&other)
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.minus(&other)
    }
}

impl core::ops::Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl core::ops::Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl core::ops::Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
