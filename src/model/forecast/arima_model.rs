use crate::common::*;

/* Yule-Walker 재귀에서 0 으로 간주할 분산/분모 하한 */
const DEGENERATE_EPS: f64 = 1e-10;

#[doc = r#"
    ARIMA(p,d,q) 모델 사양.

    fit() 은 d차 차분 후 Yule-Walker 방정식(레빈슨-더빈 재귀)으로 AR 계수를,
    AR 잔차의 자기상관으로 MA 계수를 추정한다. 분산이 0에 가까운 퇴화 시계열은
    계수 0 으로 적합되어 마지막 관측값을 그대로 예측하게 된다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ArimaModel {
    pub p: usize,
    pub d: usize,
    pub q: usize,
}

#[doc = "적합이 끝난 ARIMA 모델. 한 스텝 예측에 필요한 상태만 들고 있다."]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct FittedArima {
    ar_params: Vec<f64>,
    ma_params: Vec<f64>,
    differenced: Vec<f64>,
    residuals: Vec<f64>,
    /* 역차분용: 각 차분 단계 직전 시계열의 마지막 값 (바깥 단계부터) */
    integration_tail: Vec<f64>,
}

impl ArimaModel {
    #[doc = r#"
        시계열에 모델을 적합한다.

        # Arguments
        * `series` - 주 단위 관측값 (피벗의 한 상품 컬럼)

        # Returns
        * `Result<FittedArima, anyhow::Error>` - 관측값이 p+d+q+1 개 미만이면 오류
    "#]
    pub fn fit(&self, series: &[f64]) -> anyhow::Result<FittedArima> {
        let min_len: usize = self.p + self.d + self.q + 1;

        if series.len() < min_len {
            return Err(anyhow!(
                "[ArimaModel->fit] Insufficient observations for ARIMA({},{},{}): need at least {}, got {}",
                self.p,
                self.d,
                self.q,
                min_len,
                series.len()
            ));
        }

        /* d차 차분. 역차분을 위해 각 단계의 마지막 값을 기억해 둔다. */
        let mut integration_tail: Vec<f64> = Vec::with_capacity(self.d);
        let mut working: Vec<f64> = series.to_vec();

        for _ in 0..self.d {
            integration_tail.push(working.last().copied().unwrap_or(0.0));
            working = working.windows(2).map(|w| w[1] - w[0]).collect();
        }

        let ar_params: Vec<f64> = estimate_ar_params(&working, self.p);

        /* AR 잔차가 MA 추정의 입력이 된다 */
        let mut ar_residuals: Vec<f64> = Vec::with_capacity(working.len());
        for i in 0..working.len() {
            let mut prediction: f64 = 0.0;
            for (j, &param) in ar_params.iter().enumerate() {
                if i > j {
                    prediction += param * working[i - j - 1];
                }
            }
            ar_residuals.push(working[i] - prediction);
        }

        let ma_params: Vec<f64> = estimate_ma_params(&ar_residuals, self.q);

        /* AR + MA 양쪽을 반영한 최종 one-step-ahead 적합 패스 */
        let mut residuals: Vec<f64> = Vec::with_capacity(working.len());
        for i in 0..working.len() {
            let mut prediction: f64 = 0.0;

            for (j, &param) in ar_params.iter().enumerate() {
                if i > j {
                    prediction += param * working[i - j - 1];
                }
            }
            for (j, &param) in ma_params.iter().enumerate() {
                if j < residuals.len() {
                    prediction += param * residuals[residuals.len() - j - 1];
                }
            }

            residuals.push(working[i] - prediction);
        }

        Ok(FittedArima {
            ar_params,
            ma_params,
            differenced: working,
            residuals,
            integration_tail,
        })
    }
}

impl FittedArima {
    #[doc = "차분 스케일에서 한 스텝을 예측하고 역차분하여 원 시계열 스케일로 반환한다."]
    pub fn forecast_one(&self) -> f64 {
        let n: usize = self.differenced.len();
        let mut forecast: f64 = 0.0;

        for (j, &param) in self.ar_params.iter().enumerate() {
            if n > j {
                forecast += param * self.differenced[n - j - 1];
            }
        }
        for (j, &param) in self.ma_params.iter().enumerate() {
            if j < self.residuals.len() {
                forecast += param * self.residuals[self.residuals.len() - j - 1];
            }
        }

        /* 차분 단계를 안쪽부터 거꾸로 되밟아 누적한다 */
        for tail in self.integration_tail.iter().rev() {
            forecast += tail;
        }

        forecast
    }
}

#[doc = r#"
    Yule-Walker 방정식을 레빈슨-더빈 재귀로 풀어 AR 계수를 추정한다.
    분산이 퇴화한 시계열은 모든 계수를 0 으로 돌려준다.
"#]
fn estimate_ar_params(values: &[f64], order: usize) -> Vec<f64> {
    if order == 0 || values.len() < order + 1 {
        return vec![];
    }

    let n: usize = values.len();
    let mean: f64 = values.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = values.iter().map(|v| v - mean).collect();

    let variance: f64 = centered.iter().map(|v| v * v).sum::<f64>() / n as f64;
    if variance.abs() < DEGENERATE_EPS {
        return vec![0.0; order];
    }

    let mut autocorr: Vec<f64> = Vec::with_capacity(order + 1);
    for lag in 0..=order {
        let covariance: f64 = centered
            .iter()
            .take(n - lag)
            .zip(centered.iter().skip(lag))
            .map(|(a, b)| a * b)
            .sum::<f64>()
            / n as f64;
        autocorr.push(covariance / variance);
    }

    let mut phi: Vec<Vec<f64>> = vec![vec![0.0; order]; order];
    phi[0][0] = autocorr[1];

    for k in 1..order {
        let mut numerator: f64 = autocorr[k + 1];
        let mut denominator: f64 = 1.0;

        for j in 0..k {
            numerator -= phi[k - 1][j] * autocorr[k - j];
            denominator -= phi[k - 1][j] * autocorr[j + 1];
        }

        let reflection: f64 = if denominator.abs() < DEGENERATE_EPS {
            0.0
        } else {
            numerator / denominator
        };

        phi[k][k] = reflection;
        for j in 0..k {
            phi[k][j] = phi[k - 1][j] - reflection * phi[k - 1][k - 1 - j];
        }
    }

    phi[order - 1].clone()
}

#[doc = "AR 잔차의 표본 자기상관으로 MA 계수를 추정한다. 계수는 ±0.99 로 클램프."]
fn estimate_ma_params(residuals: &[f64], order: usize) -> Vec<f64> {
    if order == 0 || residuals.len() < order + 1 {
        return vec![];
    }

    let n: usize = residuals.len();
    let mean: f64 = residuals.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = residuals.iter().map(|v| v - mean).collect();

    let variance: f64 = centered.iter().map(|v| v * v).sum::<f64>() / n as f64;
    if variance.abs() < DEGENERATE_EPS {
        return vec![0.0; order];
    }

    let mut ma_params: Vec<f64> = Vec::with_capacity(order);
    for lag in 1..=order {
        let covariance: f64 = centered
            .iter()
            .take(n - lag)
            .zip(centered.iter().skip(lag))
            .map(|(a, b)| a * b)
            .sum::<f64>()
            / n as f64;

        ma_params.push((covariance / variance).clamp(-0.99, 0.99));
    }

    ma_params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_rejects_short_series() {
        let model: ArimaModel = ArimaModel::new(1, 1, 1);

        let result = model.fit(&[3.0, 5.0, 4.0]);

        assert!(result.is_err());
        let message: String = format!("{:?}", result.err().unwrap());
        assert!(message.contains("Insufficient observations"));
    }

    #[test]
    fn constant_series_forecasts_last_value() {
        let model: ArimaModel = ArimaModel::new(1, 1, 1);
        let series: Vec<f64> = vec![5.0; 8];

        let fitted: FittedArima = model.fit(&series).unwrap();

        assert!((fitted.forecast_one() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn linear_trend_has_degenerate_differences() {
        /* first differences of a straight line are constant, so the AR/MA
        coefficients collapse to zero and the forecast carries the tail */
        let model: ArimaModel = ArimaModel::new(1, 1, 1);
        let series: Vec<f64> = (1..=10).map(|v| v as f64).collect();

        let fitted: FittedArima = model.fit(&series).unwrap();

        assert!(fitted.ar_params().iter().all(|c| c.abs() < 1e-9));
        assert!((fitted.forecast_one() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn alternating_series_yields_negative_ar_coefficient() {
        let model: ArimaModel = ArimaModel::new(1, 0, 0);
        let series: Vec<f64> = vec![4.0, 0.0, 4.0, 0.0, 4.0, 0.0, 4.0];

        let fitted: FittedArima = model.fit(&series).unwrap();

        assert_eq!(fitted.ar_params().len(), 1);
        assert!(fitted.ar_params()[0] < -0.5);
        /* last observation is 4.0, so the one-step forecast goes negative */
        assert!(fitted.forecast_one() < 0.0);
    }

    #[test]
    fn noisy_series_produces_finite_forecast() {
        let model: ArimaModel = ArimaModel::new(1, 1, 1);
        let series: Vec<f64> = vec![12.0, 9.0, 14.0, 11.0, 16.0, 10.0, 15.0, 13.0];

        let fitted: FittedArima = model.fit(&series).unwrap();
        let forecast: f64 = fitted.forecast_one();

        assert!(forecast.is_finite());
        assert_eq!(fitted.ar_params().len(), 1);
        assert_eq!(fitted.ma_params().len(), 1);
    }
}
