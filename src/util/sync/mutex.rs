use std::ops::{Deref, DerefMut};

#[cfg(loom)]
pub struct Mutex<Inner> {
    inner: loom::sync::Mutex<Inner>,
}

#[cfg(loom)]
impl<Inner> Mutex<Inner> {
    pub fn new(value: Inner) -> Self {
        Self {
            inner: loom::sync::Mutex::new(value),
        }
    }

    pub fn lock(&self) -> MutexGuard<Inner> {
        MutexGuard {
            inner: self.inner.lock().unwrap(),
        }
    }

    pub fn into_inner(self) -> Inner {
        self.inner.into_inner().unwrap()
    }
}

#[cfg(not(loom))]
pub struct Mutex<Inner> {
    inner: parking_lot::Mutex<Inner>,
}

#[cfg(not(loom))]
impl<Inner> Mutex<Inner> {
    pub fn new(value: Inner) -> Self {
        Self {
            inner: parking_lot::Mutex::new(value),
        }
    }

    pub fn lock(&self) -> MutexGuard<Inner> {
        MutexGuard {
            inner: self.inner.lock(),
        }
    }

    pub fn into_inner(self) -> Inner {
        self.inner.into_inner()
    }
}

#[cfg(loom)]
pub struct MutexGuard<'a, Inner> {
    inner: loom::sync::MutexGuard<'a, Inner>,
}

#[cfg(not(loom))]
pub struct MutexGuard<'a, Inner> {
    inner: parking_lot::MutexGuard<'a, Inner>,
}

impl<'a, Inner> Deref for MutexGuard<'a, Inner> {
    type Target = Inner;

    fn deref(&self) -> &Inner {
        self.inner.deref()
    }
}

impl<'a, Inner> DerefMut for MutexGuard<'a, Inner> {
    fn deref_mut(&mut self) -> &mut Inner {
        self.inner.deref_mut()
    }
}
