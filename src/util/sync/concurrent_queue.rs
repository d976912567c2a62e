#[cfg(loom)]
pub struct ConcurrentQueue<Element> {
    inner: loom::sync::Mutex<Vec<Element>>,
}

#[cfg(loom)]
impl<Element> ConcurrentQueue<Element> {
    pub fn new() -> Self {
        Self {
            inner: loom::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, value: Element) {
        self.inner.lock().unwrap().push(value)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn into_items(self) -> Vec<Element> {
        self.inner.into_inner().unwrap()
    }
}

#[cfg(not(loom))]
pub struct ConcurrentQueue<Element> {
    inner: crossbeam_queue::SegQueue<Element>,
}

#[cfg(not(loom))]
impl<Element> ConcurrentQueue<Element> {
    pub fn new() -> Self {
        Self {
            inner: crossbeam_queue::SegQueue::new(),
        }
    }

    pub fn push(&self, value: Element) {
        self.inner.push(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn into_items(self) -> Vec<Element> {
        let mut items = Vec::with_capacity(self.inner.len());

        while let Some(value) = self.inner.pop() {
            items.push(value);
        }

        items
    }
}
