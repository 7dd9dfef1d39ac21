use crate::features::weather::models::{TimeWeather, WeatherForecast, WeatherIcon};

/// 同梱の4日間の天気予報を生成する
pub fn initial_weather() -> Vec<WeatherForecast> {
    use WeatherIcon::*;

    vec![
        forecast(
            "1/11 (日)",
            ("16°", Cloud, "多雲"),
            ("22°", Sun, "晴"),
            ("17°", Moon, "涼"),
            "洋蔥式穿法，內層薄長袖。",
        ),
        forecast(
            "1/12 (一)",
            ("15°", Cloud, "陰"),
            ("21°", Sun, "晴"),
            ("16°", Moon, "涼"),
            "海邊風強，必備防風外套。",
        ),
        forecast(
            "1/13 (二)",
            ("17°", Sun, "晴"),
            ("23°", Sun, "晴"),
            ("18°", Moon, "涼"),
            "穿搭以輕鬆、拍照好看為主。",
        ),
        forecast(
            "1/14 (三)",
            ("16°", Cloud, "多雲"),
            ("20°", Cloud, "陰"),
            ("17°", Moon, "涼"),
            "輕便保暖，方便搭機。",
        ),
    ]
}

type Slot = (&'static str, WeatherIcon, &'static str);

fn slot((temp, icon, desc): Slot) -> TimeWeather {
    TimeWeather {
        temp: temp.to_string(),
        icon,
        desc: desc.to_string(),
    }
}

fn forecast(
    date: &str,
    morning: Slot,
    noon: Slot,
    night: Slot,
    clothing_tip: &str,
) -> WeatherForecast {
    WeatherForecast {
        date: date.to_string(),
        morning: slot(morning),
        noon: slot(noon),
        night: slot(night),
        clothing_tip: clothing_tip.to_string(),
    }
}
