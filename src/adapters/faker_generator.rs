use fake::faker::address::raw::{
    BuildingNumber, CityPrefix, CitySuffix, CountryName, StateName, StreetName,
};
use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::{LastName, Name};
use fake::faker::number::raw::NumberWithFormat;
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{EN, ZH_CN};
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Address, Contact, ContactGenerator, GenerateOptions, GeneratorError, Locale};

/// Locale-aware generator backed by the `fake` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerGenerator {
    locale: Locale,
}

impl FakerGenerator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl ContactGenerator for FakerGenerator {
    fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        options: GenerateOptions,
    ) -> Result<Contact, GeneratorError> {
        Ok(match self.locale {
            Locale::En => fake_contact::<English, R>(rng, options),
            Locale::ZhCn => fake_contact::<Chinese, R>(rng, options),
        })
    }
}

/// How one locale spells each contact field.
///
/// `fake` only ships names for `zh_CN`; everything else falls back to English
/// data, so the Chinese address parts come from the tables below.
trait LocaleStyle {
    fn name<R: Rng + ?Sized>(rng: &mut R) -> String;
    fn phone<R: Rng + ?Sized>(rng: &mut R) -> String;
    fn address<R: Rng + ?Sized>(rng: &mut R) -> Address;

    /// ASCII mailbox in every locale
    fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
        SafeEmail(EN).fake_with_rng(rng)
    }
}

fn fake_contact<S: LocaleStyle, R: Rng + ?Sized>(rng: &mut R, options: GenerateOptions) -> Contact {
    let name = S::name(rng);
    let email = options.include_email.then(|| S::email(rng));
    let phone = options.include_phone.then(|| S::phone(rng));
    let address = options.include_address.then(|| S::address(rng));

    Contact {
        name,
        email,
        phone,
        address,
    }
}

struct English;

impl LocaleStyle for English {
    fn name<R: Rng + ?Sized>(rng: &mut R) -> String {
        Name(EN).fake_with_rng(rng)
    }

    fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
        PhoneNumber(EN).fake_with_rng(rng)
    }

    fn address<R: Rng + ?Sized>(rng: &mut R) -> Address {
        let building: String = BuildingNumber(EN).fake_with_rng(rng);
        let street: String = StreetName(EN).fake_with_rng(rng);
        Address {
            street: format!("{} {}", building, street),
            city: english_city(rng),
            state: StateName(EN).fake_with_rng(rng),
            zip_code: NumberWithFormat(EN, "#####").fake_with_rng(rng),
            country: CountryName(EN).fake_with_rng(rng),
        }
    }
}

/// "Monahanton", sometimes "Lake Monahanton". `CityName` puts a space before the suffix.
fn english_city<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base: &str = LastName(EN).fake_with_rng(rng);
    let suffix: &str = CitySuffix(EN).fake_with_rng(rng);
    if rng.gen_bool(0.25) {
        let prefix: &str = CityPrefix(EN).fake_with_rng(rng);
        format!("{} {}{}", prefix, base, suffix)
    } else {
        format!("{}{}", base, suffix)
    }
}

struct Chinese;

const ZH_CN_COUNTRY: &str = "中国";

/// Province (or municipality) and some of its cities.
const ZH_CN_REGIONS: &[(&str, &[&str])] = &[
    ("北京市", &["北京市"]),
    ("上海市", &["上海市"]),
    ("天津市", &["天津市"]),
    ("重庆市", &["重庆市"]),
    ("广东省", &["广州市", "深圳市", "珠海市", "佛山市", "东莞市"]),
    ("浙江省", &["杭州市", "宁波市", "温州市", "绍兴市"]),
    ("江苏省", &["南京市", "苏州市", "无锡市", "常州市"]),
    ("山东省", &["济南市", "青岛市", "烟台市"]),
    ("四川省", &["成都市", "绵阳市", "乐山市"]),
    ("湖北省", &["武汉市", "宜昌市", "襄阳市"]),
    ("福建省", &["福州市", "厦门市", "泉州市"]),
    ("陕西省", &["西安市", "宝鸡市", "咸阳市"]),
    ("河南省", &["郑州市", "洛阳市", "开封市"]),
    ("湖南省", &["长沙市", "株洲市", "岳阳市"]),
];

const ZH_CN_STREET_SUFFIXES: &[&str] = &["路", "街", "大道", "巷"];

/// Mobile numbers: 11 digits behind a carrier prefix.
const ZH_CN_PHONE_FORMATS: &[&str] = &[
    "130########",
    "136########",
    "139########",
    "150########",
    "158########",
    "177########",
    "186########",
    "189########",
];

impl LocaleStyle for Chinese {
    fn name<R: Rng + ?Sized>(rng: &mut R) -> String {
        Name(ZH_CN).fake_with_rng(rng)
    }

    fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
        let format = ZH_CN_PHONE_FORMATS.choose(rng).copied().unwrap_or("138########");
        NumberWithFormat(ZH_CN, format).fake_with_rng(rng)
    }

    fn address<R: Rng + ?Sized>(rng: &mut R) -> Address {
        let (province, cities) = ZH_CN_REGIONS
            .choose(rng)
            .copied()
            .unwrap_or(ZH_CN_REGIONS[0]);
        let city = cities.choose(rng).copied().unwrap_or(province);

        let street_name: &str = LastName(ZH_CN).fake_with_rng(rng);
        let suffix = ZH_CN_STREET_SUFFIXES.choose(rng).copied().unwrap_or("路");
        let number: u32 = rng.gen_range(1..=999);

        Address {
            street: format!("{}{}{}号", street_name, suffix, number),
            city: city.to_string(),
            state: province.to_string(),
            zip_code: NumberWithFormat(ZH_CN, "^#####").fake_with_rng(rng),
            country: ZH_CN_COUNTRY.to_string(),
        }
    }
}
