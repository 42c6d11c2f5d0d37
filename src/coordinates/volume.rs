use super::{Coordinates, Direction};

impl Coordinates {
    /// Effective width of x1 cell `i`.
    pub fn cell_width(&self, i: usize) -> f64 {
        self.geometry.cell_width[i]
    }

    /// Volumes of cells `il..=iu` on row `(k, j)`, written to `volumes[il..=iu]`.
    pub fn cell_volume(&self, k: usize, j: usize, il: usize, iu: usize, volumes: &mut [f64]) {
        let transverse = self.grid.dx2f(j) * self.grid.dx3f(k);
        for i in il..=iu {
            volumes[i] = self.geometry.cell_width[i] * transverse;
        }
    }

    /// Areas of the faces `il..=iu` on row `(k, j)` normal to `direction`, written to
    /// `areas[il..=iu]`. Face `i` of an x1 sweep lies on the left of cell `i`.
    pub fn face_area(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        il: usize,
        iu: usize,
        areas: &mut [f64],
    ) {
        let (dx2, dx3) = (self.grid.dx2f(j), self.grid.dx3f(k));
        for i in il..=iu {
            areas[i] = match direction {
                Direction::X1 => dx2 * dx3,
                Direction::X2 => self.geometry.cell_width[i] * dx3,
                Direction::X3 => self.geometry.cell_width[i] * dx2,
            };
        }
    }

    /// Lengths of the cell edges `il..=iu` on row `(k, j)` running along `direction`.
    pub fn edge_length(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        il: usize,
        iu: usize,
        lengths: &mut [f64],
    ) {
        for i in il..=iu {
            lengths[i] = match direction {
                Direction::X1 => self.geometry.cell_width[i],
                Direction::X2 => self.grid.dx2f(j),
                Direction::X3 => self.grid.dx3f(k),
            };
        }
    }

    /// Width of cell `(i, j, k)` along `direction`, used for time step limits.
    pub fn center_width(&self, direction: Direction, k: usize, j: usize, i: usize) -> f64 {
        match direction {
            Direction::X1 => self.geometry.cell_width[i],
            Direction::X2 => self.grid.dx2f(j),
            Direction::X3 => self.grid.dx3f(k),
        }
    }
}
