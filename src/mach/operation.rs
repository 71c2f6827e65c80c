use super::array::{check_size, size_of, Array, ArrayRef, Data, Kind, MAX_RANK};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn identity(w: ArrayRef) -> Result<ArrayRef> {
        Ok(w)
    }

    pub fn size(w: ArrayRef) -> Result<ArrayRef> {
        let n = w.shape().first().copied().unwrap_or(1);
        Ok(Rc::new(Array::scalar(as_value(n)?)))
    }

    pub fn iota(w: ArrayRef) -> Result<ArrayRef> {
        let n = scalar_arg(&w, "iota")?;
        let n = match usize::try_from(n) {
            Ok(n) => n,
            Err(_) => return Err(error!(InvalidArgument; &format!("iota of negative {}", n))),
        };
        check_size(n)?;
        let mut z = Array::make(Kind::Plain, &[n]);
        if let Some(v) = z.plain_mut() {
            for (i, x) in v.iter_mut().enumerate() {
                *x = as_value(i)?;
            }
        }
        Ok(Rc::new(z))
    }

    pub fn r#box(w: ArrayRef) -> Result<ArrayRef> {
        Ok(Rc::new(Array::boxed(w)?))
    }

    pub fn shape(w: ArrayRef) -> Result<ArrayRef> {
        let mut z = Array::make(Kind::Plain, &[w.rank()]);
        if let Some(v) = z.plain_mut() {
            for (x, d) in v.iter_mut().zip(w.shape()) {
                *x = as_value(*d)?;
            }
        }
        Ok(Rc::new(z))
    }

    pub fn plus(a: ArrayRef, w: ArrayRef) -> Result<ArrayRef> {
        if a.shape() != w.shape() {
            return Err(error!(ShapeMismatch; &format!(
                "{:?} and {:?}",
                a.shape(),
                w.shape()
            )));
        }
        let (l, r) = match (a.plain(), w.plain()) {
            (Some(l), Some(r)) => (l, r),
            _ => return Err(error!(InvalidArgument; "cannot add boxed arrays")),
        };
        let mut v = Vec::with_capacity(r.len());
        for (x, y) in l.iter().zip(r) {
            match x.checked_add(*y) {
                Some(n) => v.push(n),
                None => return Err(error!(Overflow)),
            }
        }
        Ok(Rc::new(Array::new(w.shape().to_vec(), Data::Plain(v))?))
    }

    pub fn from(a: ArrayRef, w: ArrayRef) -> Result<ArrayRef> {
        let i = scalar_arg(&a, "index")?;
        let (&count, cell_shape) = match w.shape().split_first() {
            Some(split) => split,
            None => return Err(error!(RankError; "cannot index a scalar")),
        };
        let i = match usize::try_from(i) {
            Ok(i) if i < count => i,
            _ => {
                return Err(error!(IndexOutOfRange; &format!(
                    "{} is outside 0..{}",
                    i, count
                )))
            }
        };
        let n = size_of(cell_shape);
        let data = w.data().slice(i * n..(i + 1) * n);
        Ok(Rc::new(Array::new(cell_shape.to_vec(), data)?))
    }

    pub fn find(_a: ArrayRef, _w: ArrayRef) -> Result<ArrayRef> {
        Err(error!(NotImplemented; "find"))
    }

    pub fn reshape(a: ArrayRef, w: ArrayRef) -> Result<ArrayRef> {
        let target = match a.plain() {
            Some(target) => target,
            None => return Err(error!(InvalidArgument; "shape must not be boxed")),
        };
        // The leading axis of the left operand is the result rank.
        let rank = a.shape().first().copied().unwrap_or(1);
        if rank > MAX_RANK {
            return Err(error!(RankError; &format!("rank {} is above {}", rank, MAX_RANK)));
        }
        let target = match target.get(..rank) {
            Some(target) => target,
            None => return Err(error!(InvalidArgument; "shape has too few values")),
        };
        let mut shape = Vec::with_capacity(target.len());
        for d in target {
            match usize::try_from(*d) {
                Ok(d) => shape.push(d),
                Err(_) => {
                    return Err(error!(InvalidArgument; &format!("negative axis {}", d)))
                }
            }
        }
        let n = shape
            .iter()
            .try_fold(1usize, |n, d| n.checked_mul(*d))
            .ok_or_else(|| error!(OutOfMemory))?;
        check_size(n)?;
        if n == 0 {
            return Ok(Rc::new(Array::make(w.kind(), &shape)));
        }
        if w.is_empty() {
            return Err(error!(InvalidArgument; "nothing to reshape"));
        }
        Ok(Rc::new(Array::new(shape, w.data().cycle(n))?))
    }

    pub fn concatenate(a: ArrayRef, w: ArrayRef) -> Result<ArrayRef> {
        let n = a.len() + w.len();
        check_size(n)?;
        let data = a.data().concat(w.data())?;
        Ok(Rc::new(Array::new(vec![n], data)?))
    }
}

/// Reads the single value of a rank-0 plain operand.
fn scalar_arg(w: &Array, what: &str) -> Result<i64> {
    if w.kind() == Kind::Boxed {
        return Err(error!(InvalidArgument; &format!("{} must not be boxed", what)));
    }
    match w.as_scalar() {
        Some(n) => Ok(n),
        None => Err(error!(RankError; &format!("{} must be a scalar", what))),
    }
}

fn as_value(n: usize) -> Result<i64> {
    i64::try_from(n).map_err(|_| error!(Overflow))
}
