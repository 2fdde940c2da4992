use crate::Error;

// Zero-filled beyond the loaded image, grows on first touch of an address.
#[derive(Debug, Clone)]
pub(super) struct Memory {
    cells: Vec<i64>,
    limit: Option<usize>,
}

impl Memory {
    pub fn new(image: &[i64], limit: Option<usize>) -> Self {
        Memory {
            cells: Vec::from(image),
            limit,
        }
    }

    pub fn read(&mut self, addr: usize) -> Result<i64, Error> {
        self.reserve_to(addr)?;
        Ok(self.cells[addr])
    }

    pub fn write(&mut self, addr: usize, value: i64) -> Result<(), Error> {
        self.reserve_to(addr)?;
        self.cells[addr] = value;

        Ok(())
    }

    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    fn reserve_to(&mut self, addr: usize) -> Result<(), Error> {
        if addr < self.cells.len() {
            return Ok(());
        }

        if let Some(limit) = self.limit {
            if addr >= limit {
                return Err(Error::MemoryLimitExceeded(addr, limit));
            }
        }

        let len = addr.checked_add(1).ok_or(Error::OutOfMemory(addr))?;
        self.cells
            .try_reserve(len - self.cells.len())
            .map_err(|_| Error::OutOfMemory(addr))?;
        self.cells.resize(len, 0);
        Ok(())
    }
}
