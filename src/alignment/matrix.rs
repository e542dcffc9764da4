/// Tabela de scores H com (|a|+1) x (|b|+1) células, armazenada em linha.
///
/// Linha 0 e coluna 0 começam em zero (condição de contorno local).
pub struct ScoringMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl ScoringMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Maior valor em qualquer célula. Com contorno zerado, nunca é negativo.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }
}
