use crate::error;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Shared handle to an array. Boxes, symbol slots and
/// evaluator temporaries may all hold the same array.
pub type ArrayRef = Rc<Array>;

pub const MAX_RANK: usize = 3;

/// Largest element count any verb may produce.
pub const MAX_ELEMENTS: usize = 65536;

/// Deepest nesting of boxes. Rendering and dropping recurse once per level.
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Plain,
    Boxed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    Plain(Vec<i64>),
    Boxed(Vec<ArrayRef>),
}

impl Data {
    pub fn kind(&self) -> Kind {
        match self {
            Data::Plain(_) => Kind::Plain,
            Data::Boxed(_) => Kind::Boxed,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Data::Plain(v) => v.len(),
            Data::Boxed(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn slice(&self, range: std::ops::Range<usize>) -> Data {
        match self {
            Data::Plain(v) => Data::Plain(v[range].to_vec()),
            Data::Boxed(v) => Data::Boxed(v[range].to_vec()),
        }
    }

    /// First `n` elements, wrapping around to the start as often as needed.
    pub fn cycle(&self, n: usize) -> Data {
        match self {
            Data::Plain(v) => Data::Plain(v.iter().cycle().take(n).copied().collect()),
            Data::Boxed(v) => Data::Boxed(v.iter().cycle().take(n).cloned().collect()),
        }
    }

    /// Joins two flat sequences. An empty side takes the kind of the other.
    pub fn concat(&self, other: &Data) -> Result<Data> {
        match (self, other) {
            (Data::Plain(l), Data::Plain(r)) => Ok(Data::Plain([&l[..], &r[..]].concat())),
            (Data::Boxed(l), Data::Boxed(r)) => Ok(Data::Boxed([&l[..], &r[..]].concat())),
            (Data::Plain(l), Data::Boxed(_)) if l.is_empty() => Ok(other.clone()),
            (Data::Boxed(_), Data::Plain(r)) if r.is_empty() => Ok(self.clone()),
            _ => Err(error!(InvalidArgument; "cannot join boxed and plain arrays")),
        }
    }

    /// Box nesting below this level.
    fn depth(&self) -> usize {
        match self {
            Data::Plain(_) => 0,
            Data::Boxed(v) => 1 + v.iter().map(|a| a.depth).max().unwrap_or(0),
        }
    }
}

/// ## Shaped array
///
/// The only value type of the language. `data` is stored flat in
/// row-major order and always holds `size_of(shape)` elements.

#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    shape: Vec<usize>,
    data: Data,
    depth: usize,
}

/// Element count of a shape. The empty shape has one element.
pub fn size_of(shape: &[usize]) -> usize {
    shape.iter().product()
}

impl Array {
    /// Zero-filled array. Boxed arrays are filled with boxes of a scalar zero.
    /// Verbs fill plain results in place through `plain_mut`.
    pub fn make(kind: Kind, shape: &[usize]) -> Array {
        debug_assert!(shape.len() <= MAX_RANK);
        let n = size_of(shape);
        let data = match kind {
            Kind::Plain => Data::Plain(vec![0; n]),
            Kind::Boxed => Data::Boxed(vec![Rc::new(Array::scalar(0)); n]),
        };
        Array {
            shape: shape.to_vec(),
            depth: data.depth(),
            data,
        }
    }

    pub fn scalar(n: i64) -> Array {
        Array {
            shape: vec![],
            data: Data::Plain(vec![n]),
            depth: 0,
        }
    }

    pub fn vector(v: Vec<i64>) -> Array {
        Array {
            shape: vec![v.len()],
            data: Data::Plain(v),
            depth: 0,
        }
    }

    /// Rank-0 box around `item`, refused once boxes nest `MAX_DEPTH` deep.
    pub fn boxed(item: ArrayRef) -> Result<Array> {
        if item.depth >= MAX_DEPTH {
            return Err(error!(OutOfMemory; &format!("boxes nest deeper than {}", MAX_DEPTH)));
        }
        Ok(Array {
            shape: vec![],
            depth: item.depth + 1,
            data: Data::Boxed(vec![item]),
        })
    }

    /// Checked constructor for verb results.
    pub fn new(shape: Vec<usize>, data: Data) -> Result<Array> {
        if shape.len() > MAX_RANK {
            return Err(error!(RankError; &format!("rank {} is above {}", shape.len(), MAX_RANK)));
        }
        if data.len() != size_of(&shape) {
            return Err(error!(InternalError; "data does not fit shape"));
        }
        let depth = data.depth();
        if depth > MAX_DEPTH {
            return Err(error!(OutOfMemory; &format!("boxes nest deeper than {}", MAX_DEPTH)));
        }
        Ok(Array { shape, data, depth })
    }

    pub fn kind(&self) -> Kind {
        self.data.kind()
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn plain(&self) -> Option<&[i64]> {
        match &self.data {
            Data::Plain(v) => Some(v),
            Data::Boxed(_) => None,
        }
    }

    pub(crate) fn plain_mut(&mut self) -> Option<&mut [i64]> {
        match &mut self.data {
            Data::Plain(v) => Some(v),
            Data::Boxed(_) => None,
        }
    }

    /// The value of a rank-0 plain array.
    pub fn as_scalar(&self) -> Option<i64> {
        match self.plain() {
            Some([n]) if self.rank() == 0 => Some(*n),
            _ => None,
        }
    }
}

/// Guards allocation of `n` elements.
pub fn check_size(n: usize) -> Result<()> {
    if n > MAX_ELEMENTS {
        Err(error!(OutOfMemory; &format!("{} elements is above {}", n, MAX_ELEMENTS)))
    } else {
        Ok(())
    }
}
