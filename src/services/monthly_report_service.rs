//! Motor de agregación mensual
//!
//! Calcula, para un periodo (año, mes), los kilómetros recorridos, litros,
//! coste y ratios de eficiencia por vehículo y para toda la flota, a partir
//! de las lecturas de odómetro y los repostajes. Función pura: no modifica
//! los registros de entrada.

use chrono::NaiveDateTime;

use crate::models::{
    FleetSummary, FleetVehicle, FuelPurchase, MonthlyReport, MonthlySummary, OdometerReading,
    ReportPeriod,
};

/// Redondeo a `decimals` decimales para presentación
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Litros por 100 km (2 decimales), `None` sin distancia
pub fn liters_per_100(liters: f64, distance: f64) -> Option<f64> {
    (distance > 0.0).then(|| round_to(liters / distance * 100.0, 2))
}

/// Precio medio por litro (3 decimales), `None` sin litros
pub fn avg_price_per_liter(cost: f64, liters: f64) -> Option<f64> {
    (liters > 0.0).then(|| round_to(cost / liters, 3))
}

/// Totales sin redondear de un vehículo
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct VehicleTotals {
    distance: f64,
    liters: f64,
    cost: f64,
}

/// Lectura más reciente que cumple `accept`. Con marcas de tiempo iguales
/// gana la última en orden de entrada.
fn latest_reading<'a, I, F>(readings: I, accept: F) -> Option<&'a OdometerReading>
where
    I: Iterator<Item = &'a OdometerReading>,
    F: Fn(&NaiveDateTime) -> bool,
{
    readings
        .filter(|reading| accept(&reading.at))
        .fold(None, |best, reading| match best {
            Some(current) if current.at > reading.at => Some(current),
            _ => Some(reading),
        })
}

fn vehicle_totals(
    vehicle_id: &str,
    period: &ReportPeriod,
    odometer: &[OdometerReading],
    fuel: &[FuelPurchase],
) -> VehicleTotals {
    let readings = || odometer.iter().filter(|r| r.vehicle_id == vehicle_id);
    let month_start = period.month_start();
    let month_end = period.month_end();

    let baseline = latest_reading(readings(), |at| *at < month_start);
    let end = latest_reading(readings(), |at| *at <= month_end).or(baseline);

    // Lecturas corregidas o desordenadas no producen distancias negativas
    let distance = match (baseline, end) {
        (Some(baseline), Some(end)) => (end.odometer - baseline.odometer).max(0.0),
        _ => 0.0,
    };

    let (liters, cost) = fuel
        .iter()
        .filter(|f| f.vehicle_id == vehicle_id && period.contains(&f.at))
        .fold((0.0, 0.0), |(liters, cost), f| (liters + f.liters, cost + f.price_total));

    VehicleTotals {
        distance,
        liters,
        cost,
    }
}

/// Agregación mensual de toda la flota.
///
/// Los ratios de la flota se calculan sobre los totales (ponderados por
/// distancia), no como media de los ratios por vehículo. El redondeo solo se
/// aplica al presentar cada resumen.
pub fn aggregate_month(
    period: &ReportPeriod,
    vehicles: &[FleetVehicle],
    odometer: &[OdometerReading],
    fuel: &[FuelPurchase],
) -> MonthlyReport {
    let mut fleet = VehicleTotals::default();
    let mut items = Vec::with_capacity(vehicles.len());

    for vehicle in vehicles {
        let totals = vehicle_totals(&vehicle.id, period, odometer, fuel);
        fleet.distance += totals.distance;
        fleet.liters += totals.liters;
        fleet.cost += totals.cost;

        items.push(MonthlySummary {
            vehicle_id: vehicle.id.clone(),
            plate: vehicle.plate.clone(),
            name: vehicle.name.clone(),
            km: totals.distance,
            liters: round_to(totals.liters, 2),
            cost: round_to(totals.cost, 2),
            l_per_100: liters_per_100(totals.liters, totals.distance),
            avg_price_per_liter: avg_price_per_liter(totals.cost, totals.liters),
        });
    }

    MonthlyReport {
        year: period.year,
        month: period.month,
        items,
        summary: FleetSummary {
            km: fleet.distance,
            liters: round_to(fleet.liters, 2),
            cost: round_to(fleet.cost, 2),
            l_per_100: liters_per_100(fleet.liters, fleet.distance),
            avg_price_per_liter: avg_price_per_liter(fleet.cost, fleet.liters),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn vehicle(id: &str) -> FleetVehicle {
        FleetVehicle {
            id: id.to_string(),
            plate: format!("{}-PLATE", id),
            name: format!("{}-name", id),
        }
    }

    fn reading(id: &str, at: NaiveDateTime, odometer: f64) -> OdometerReading {
        OdometerReading {
            vehicle_id: id.to_string(),
            at,
            odometer,
        }
    }

    fn purchase(id: &str, at: NaiveDateTime, liters: f64, price_total: f64) -> FuelPurchase {
        FuelPurchase {
            vehicle_id: id.to_string(),
            at,
            liters,
            price_total,
        }
    }

    fn november() -> ReportPeriod {
        ReportPeriod::new(2025, 11).unwrap()
    }

    #[test]
    fn test_distance_from_baseline_to_month_end() {
        let odometer = vec![
            reading("v1", at(2025, 10, 31), 100_000.0),
            reading("v1", at(2025, 11, 30), 101_250.0),
        ];
        let report = aggregate_month(&november(), &[vehicle("v1")], &odometer, &[]);
        assert_eq!(report.items[0].km, 1250.0);
        assert_eq!(report.items[0].l_per_100, None);
        assert_eq!(report.items[0].avg_price_per_liter, None);
    }

    #[test]
    fn test_ratios_are_rounded() {
        let odometer = vec![
            reading("v1", at(2025, 10, 31), 100_000.0),
            reading("v1", at(2025, 11, 30), 101_250.0),
        ];
        let fuel = vec![
            purchase("v1", at(2025, 11, 5), 25.2, 42.8),
            purchase("v1", at(2025, 11, 20), 30.0, 51.2),
        ];
        let report = aggregate_month(&november(), &[vehicle("v1")], &odometer, &fuel);
        let item = &report.items[0];
        assert_eq!(item.liters, 55.2);
        assert_eq!(item.cost, 94.0);
        assert_eq!(item.l_per_100, Some(4.42));
        assert_eq!(item.avg_price_per_liter, Some(1.703));
    }

    #[test]
    fn test_end_reading_falls_back_to_baseline() {
        // La única lectura posterior cae fuera del mes
        let odometer = vec![
            reading("v2", at(2025, 10, 31), 220_000.0),
            reading("v2", at(2025, 12, 1), 220_510.0),
        ];
        let fuel = vec![purchase("v2", at(2025, 11, 10), 40.0, 68.4)];
        let report = aggregate_month(&november(), &[vehicle("v2")], &odometer, &fuel);
        let item = &report.items[0];
        assert_eq!(item.km, 0.0);
        assert_eq!(item.liters, 40.0);
        assert_eq!(item.l_per_100, None);
        assert_eq!(item.avg_price_per_liter, Some(1.71));
    }

    #[test]
    fn test_no_baseline_means_zero_distance() {
        let odometer = vec![
            reading("v1", at(2025, 11, 2), 5_000.0),
            reading("v1", at(2025, 11, 28), 6_000.0),
        ];
        let report = aggregate_month(&november(), &[vehicle("v1")], &odometer, &[]);
        assert_eq!(report.items[0].km, 0.0);
    }

    #[test]
    fn test_negative_delta_is_clamped() {
        let odometer = vec![
            reading("v1", at(2025, 10, 15), 90_000.0),
            reading("v1", at(2025, 11, 15), 89_000.0),
        ];
        let report = aggregate_month(&november(), &[vehicle("v1")], &odometer, &[]);
        assert_eq!(report.items[0].km, 0.0);
    }

    #[test]
    fn test_baseline_uses_latest_prior_reading() {
        let odometer = vec![
            reading("v1", at(2025, 10, 31), 1_500.0),
            reading("v1", at(2025, 9, 1), 1_000.0),
            reading("v1", at(2025, 11, 30), 1_800.0),
            reading("v1", at(2025, 11, 10), 1_600.0),
        ];
        let report = aggregate_month(&november(), &[vehicle("v1")], &odometer, &[]);
        assert_eq!(report.items[0].km, 300.0);
    }

    #[test]
    fn test_fuel_window_is_inclusive() {
        let last_instant = NaiveDate::from_ymd_opt(2025, 11, 30)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let fuel = vec![
            purchase("v1", at(2025, 11, 1), 10.0, 15.0),
            purchase("v1", last_instant, 20.0, 30.0),
            purchase("v1", at(2025, 12, 1), 99.0, 99.0),
            purchase("v1", at(2025, 10, 31), 99.0, 99.0),
        ];
        let report = aggregate_month(&november(), &[vehicle("v1")], &[], &fuel);
        assert_eq!(report.items[0].liters, 30.0);
        assert_eq!(report.items[0].cost, 45.0);
    }

    #[test]
    fn test_equal_timestamps_resolve_deterministically() {
        let odometer = vec![
            reading("v1", at(2025, 10, 31), 100.0),
            reading("v1", at(2025, 11, 30), 400.0),
            reading("v1", at(2025, 11, 30), 300.0),
        ];
        let first = aggregate_month(&november(), &[vehicle("v1")], &odometer, &[]);
        let second = aggregate_month(&november(), &[vehicle("v1")], &odometer, &[]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fleet_totals_sum_vehicle_values() {
        let odometer = vec![
            reading("v1", at(2025, 10, 31), 100_000.0),
            reading("v1", at(2025, 11, 30), 101_250.0),
            reading("v2", at(2025, 10, 31), 220_000.0),
            reading("v2", at(2025, 11, 25), 220_333.3),
        ];
        let fuel = vec![
            purchase("v1", at(2025, 11, 5), 25.2, 42.8),
            purchase("v1", at(2025, 11, 20), 30.0, 51.2),
            purchase("v2", at(2025, 11, 10), 40.0, 68.4),
        ];
        let vehicles = vec![vehicle("v1"), vehicle("v2")];
        let report = aggregate_month(&november(), &vehicles, &odometer, &fuel);

        let km: f64 = report.items.iter().map(|i| i.km).sum();
        assert_eq!(report.summary.km, km);
        assert_eq!(report.summary.liters, 95.2);
        assert_eq!(report.summary.cost, 162.4);
    }

    #[test]
    fn test_fleet_ratio_is_distance_weighted() {
        let odometer = vec![
            reading("v1", at(2025, 10, 31), 0.0),
            reading("v1", at(2025, 11, 30), 1_000.0),
            reading("v2", at(2025, 10, 31), 0.0),
            reading("v2", at(2025, 11, 30), 100.0),
        ];
        let fuel = vec![
            purchase("v1", at(2025, 11, 5), 50.0, 75.0),
            purchase("v2", at(2025, 11, 5), 20.0, 30.0),
        ];
        let vehicles = vec![vehicle("v1"), vehicle("v2")];
        let report = aggregate_month(&november(), &vehicles, &odometer, &fuel);

        assert_eq!(report.items[0].l_per_100, Some(5.0));
        assert_eq!(report.items[1].l_per_100, Some(20.0));
        // 70 L / 1100 km, no la media 12.5
        assert_eq!(report.summary.l_per_100, Some(6.36));
        assert_eq!(report.summary.avg_price_per_liter, Some(1.5));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let odometer = vec![
            reading("v1", at(2025, 11, 30), 101_250.0),
            reading("v1", at(2025, 10, 31), 100_000.0),
        ];
        let snapshot = odometer.clone();
        let _ = aggregate_month(&november(), &[vehicle("v1")], &odometer, &[]);
        assert_eq!(odometer, snapshot);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(4.416, 2), 4.42);
        assert_eq!(round_to(1.702_898_550_7, 3), 1.703);
        assert_eq!(round_to(94.000_000_000_01, 2), 94.0);
    }
}
