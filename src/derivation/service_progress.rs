//! Service-length progress indicator.

use rust_decimal::Decimal;

/// Years of service at which the progress indicator is full.
pub const DEFAULT_SERVICE_CAP_YEARS: u32 = 10;

/// Linear ratio of `years_of_service` to `cap_years`, clamped to `[0, 1]`.
///
/// A cap of zero means any service at all fills the indicator.
///
/// # Example
///
/// ```
/// use employee_directory::derivation::service_progress_ratio;
/// use rust_decimal::Decimal;
///
/// assert_eq!(service_progress_ratio(3, 10), Decimal::new(3, 1));
/// assert_eq!(service_progress_ratio(25, 10), Decimal::ONE);
/// ```
pub fn service_progress_ratio(years_of_service: u32, cap_years: u32) -> Decimal {
    if cap_years == 0 {
        return if years_of_service > 0 {
            Decimal::ONE
        } else {
            Decimal::ZERO
        };
    }

    let ratio = Decimal::from(years_of_service) / Decimal::from(cap_years);
    ratio.clamp(Decimal::ZERO, Decimal::ONE)
}

/// [`service_progress_ratio`] expressed as a percentage in `[0, 100]`.
pub fn service_progress_percent(years_of_service: u32, cap_years: u32) -> Decimal {
    (service_progress_ratio(years_of_service, cap_years) * Decimal::ONE_HUNDRED).normalize()
}
