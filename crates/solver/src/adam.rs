/// Adam optimizer with bias-corrected moment estimates.
pub struct Adam {
    stepsize: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    m: Vec<f64>,
    v: Vec<f64>,
    t: u32,
}

impl Adam {
    pub fn new(dim: usize, stepsize: f64) -> Self {
        Self {
            stepsize,
            beta1: 0.9,
            beta2: 0.99,
            eps: 1e-8,
            m: vec![0.0; dim],
            v: vec![0.0; dim],
            t: 0,
        }
    }

    pub fn step(&mut self, params: &mut [f64], grad: &[f64]) {
        assert_eq!(params.len(), self.m.len());
        assert_eq!(grad.len(), self.m.len());

        self.t += 1;
        let c1 = 1.0 - self.beta1.powi(self.t as i32);
        let c2 = 1.0 - self.beta2.powi(self.t as i32);

        for i in 0..params.len() {
            self.m[i] = self.beta1 * self.m[i] + (1.0 - self.beta1) * grad[i];
            self.v[i] = self.beta2 * self.v[i] + (1.0 - self.beta2) * grad[i] * grad[i];

            let m_hat = self.m[i] / c1;
            let v_hat = self.v[i] / c2;
            params[i] -= self.stepsize * m_hat / (v_hat.sqrt() + self.eps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Adam;

    #[test]
    fn descends_a_quadratic() {
        let mut x = vec![0.0f64];
        let mut adam = Adam::new(1, 0.1);

        for _ in 0..300 {
            let grad = vec![2.0 * (x[0] - 1.0)];
            adam.step(&mut x, &grad);
        }

        assert!((x[0] - 1.0).abs() < 0.05, "x = {}", x[0]);
    }
}
