//! Building this module successfully guarantees that the library is no-std compatible

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use battery_lut::{
    interpolate_accumulation_correction, interpolate_aging_scale_factor,
    interpolate_full_charge_capacity, interpolate_open_circuit_voltage, interpolate_percent,
    interpolate_scale_factor, interpolate_slope, IbatTempAccLut, PcTempOcvLut, ScaleFactorLut,
    SingleRowLut,
};

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    // We can't print, so there's not much to do here
    loop {}
}

#[no_mangle]
pub fn _start() -> ! {
    let temp = [0_i32, 25];
    let percent = [100, 0];
    let ocv = [4150, 4200, 3750, 3800];
    let fcc = [950, 1000];
    let ibat = [0, 1000];

    let fcc_lut = SingleRowLut::new(&temp, &fcc).unwrap();
    let ocv_lut = PcTempOcvLut::new(&percent, &temp, &ocv).unwrap();
    let sf_lut = ScaleFactorLut::new(&percent, &temp, &ocv).unwrap();
    let acc_lut = IbatTempAccLut::new(&ibat, &temp, &ocv).unwrap();

    interpolate_full_charge_capacity(&fcc_lut, 100);
    interpolate_aging_scale_factor(Some(&fcc_lut), 100);
    interpolate_scale_factor(Some(&sf_lut), 100, 50);
    interpolate_open_circuit_voltage(&ocv_lut, 100, 50);
    interpolate_percent(&ocv_lut, 100, 4000);
    interpolate_slope(&ocv_lut, 100, 50);
    interpolate_accumulation_correction(&acc_lut, 100, 500);

    loop {} // We don't actually run this, just compile it
}
