use super::domain::{ComputerFields, ComputerStyle, Dimensions, MemorySpec, Resolution, StorageSpec};
use super::hardware::{CpuSpec, GpuSpec};

/// Typed set of listing assignments.
///
/// `None` leaves a field untouched. Optional listing fields use a nested `Option` so a
/// change can clear them: `price: Some(None)` removes the price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputerChanges {
    pub brand: Option<Option<String>>,
    pub name: Option<Option<String>>,
    pub style: Option<ComputerStyle>,
    pub rating: Option<Option<f64>>,
    pub reviews: Option<u32>,
    pub price: Option<Option<f64>>,
    pub msrp: Option<Option<f64>>,
    pub sale: Option<u8>,
    pub weight: Option<Option<f64>>,
    pub dimensions: Option<Dimensions>,
    pub screen: Option<Option<f64>>,
    pub resolution: Option<Resolution>,
    pub refresh: Option<u32>,
    pub keypad: Option<bool>,
    pub webcam: Option<bool>,
    pub backlit: Option<bool>,
    pub cpu: Option<CpuSpec>,
    pub gpu: Option<GpuSpec>,
    pub ram: Option<MemorySpec>,
    pub storage: Option<StorageSpec>,
    pub url: Option<Option<String>>,
}

impl ComputerChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Assign every present change. No validation happens here.
    pub fn apply_to(self, fields: &mut ComputerFields) {
        fn assign<T>(slot: &mut T, change: Option<T>) {
            if let Some(value) = change {
                *slot = value;
            }
        }

        assign(&mut fields.brand, self.brand);
        assign(&mut fields.name, self.name);
        assign(&mut fields.style, self.style);
        assign(&mut fields.rating, self.rating);
        assign(&mut fields.reviews, self.reviews);
        assign(&mut fields.price, self.price);
        assign(&mut fields.msrp, self.msrp);
        assign(&mut fields.sale, self.sale);
        assign(&mut fields.weight, self.weight);
        assign(&mut fields.dimensions, self.dimensions);
        assign(&mut fields.screen, self.screen);
        assign(&mut fields.resolution, self.resolution);
        assign(&mut fields.refresh, self.refresh);
        assign(&mut fields.keypad, self.keypad);
        assign(&mut fields.webcam, self.webcam);
        assign(&mut fields.backlit, self.backlit);
        assign(&mut fields.cpu, self.cpu);
        assign(&mut fields.gpu, self.gpu);
        assign(&mut fields.ram, self.ram);
        assign(&mut fields.storage, self.storage);
        assign(&mut fields.url, self.url);
    }
}
