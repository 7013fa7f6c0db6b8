use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::DataPools;
use crate::domain::{Address, Contact, ContactGenerator, GenerateOptions, GeneratorError};

/// Draws every field uniformly from a set of fixed value pools.
pub struct PoolGenerator<'a> {
    pools: &'a DataPools,
}

impl<'a> PoolGenerator<'a> {
    pub fn new(pools: &'a DataPools) -> Self {
        Self { pools }
    }

    fn pick<R: Rng + ?Sized>(
        rng: &mut R,
        name: &'static str,
        pool: &'a [String],
    ) -> Result<&'a str, GeneratorError> {
        pool.choose(rng)
            .map(String::as_str)
            .ok_or(GeneratorError::EmptyPool(name))
    }
}

impl ContactGenerator for PoolGenerator<'_> {
    fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        options: GenerateOptions,
    ) -> Result<Contact, GeneratorError> {
        let pools = self.pools;
        let first = Self::pick(rng, "first_names", &pools.first_names)?;
        let last = Self::pick(rng, "last_names", &pools.last_names)?;

        let email = if options.include_email {
            let domain = Self::pick(rng, "email_domains", &pools.email_domains)?;
            Some(format!(
                "{}.{}@{}",
                first.to_lowercase(),
                last.to_lowercase(),
                domain
            ))
        } else {
            None
        };

        let phone = options.include_phone.then(|| phone_number(rng));

        let address = if options.include_address {
            let number: u32 = rng.gen_range(1..=9999);
            let street = Self::pick(rng, "streets", &pools.streets)?;
            Some(Address {
                street: format!("{} {}", number, street),
                city: Self::pick(rng, "cities", &pools.cities)?.to_string(),
                state: Self::pick(rng, "states", &pools.states)?.to_string(),
                zip_code: zip_code(rng),
                country: Self::pick(rng, "countries", &pools.countries)?.to_string(),
            })
        } else {
            None
        };

        Ok(Contact {
            name: format!("{} {}", first, last),
            email,
            phone,
            address,
        })
    }
}

/// `(AAA) EEE-NNNN` with no leading zero in any group.
fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area: u32 = rng.gen_range(100..=999);
    let exchange: u32 = rng.gen_range(100..=999);
    let line: u32 = rng.gen_range(1000..=9999);
    format!("({}) {}-{}", area, exchange, line)
}

fn zip_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(10000..=99999u32).to_string()
}
