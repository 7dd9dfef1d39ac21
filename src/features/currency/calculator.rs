/// 計算機で使える文字
const ALLOWED_CHARS: &str = "0123456789+-*/.";

/// 四則演算の式を評価する
///
/// 許可された文字（`0-9 + - * / .`）以外は取り除いてから評価する。
/// 乗除は加減より優先し、同じ優先順位は左から計算する。
/// 不正な式（末尾の演算子、`1.2.3`、`++`/`--` など）や、結果が有限でない場合（0除算）は0を返す。
///
/// # 引数
/// * `input` - 計算機の表示文字列
///
/// # 戻り値
/// 計算結果（失敗時は0）
pub fn evaluate_expression(input: &str) -> f64 {
    let sanitized: Vec<u8> = input
        .chars()
        .filter(|c| ALLOWED_CHARS.contains(*c))
        .map(|c| c as u8)
        .collect();

    if sanitized.is_empty() {
        return 0.0;
    }

    // 同符号の連続はインクリメント/デクリメント扱いで不正
    if sanitized
        .windows(2)
        .any(|w| w == b"++" || w == b"--")
    {
        return 0.0;
    }

    let mut parser = Parser {
        input: &sanitized,
        pos: 0,
    };

    match parser.parse_expression() {
        Some(value) if parser.is_at_end() && value.is_finite() => {
            // -0 は 0 として扱う
            if value == 0.0 {
                0.0
            } else {
                value
            }
        }
        _ => 0.0,
    }
}

/// 再帰下降パーサー
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := unary (('*' | '/') unary)*
/// unary      := ('+' | '-') unary | number
/// number     := digits ['.' digits*] | '.' digits
/// ```
struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn parse_expression(&mut self) -> Option<f64> {
        let mut value = self.parse_term()?;
        while let Some(op @ (b'+' | b'-')) = self.peek() {
            self.pos += 1;
            let rhs = self.parse_term()?;
            value = if op == b'+' { value + rhs } else { value - rhs };
        }
        Some(value)
    }

    fn parse_term(&mut self) -> Option<f64> {
        let mut value = self.parse_unary()?;
        while let Some(op @ (b'*' | b'/')) = self.peek() {
            self.pos += 1;
            let rhs = self.parse_unary()?;
            value = if op == b'*' { value * rhs } else { value / rhs };
        }
        Some(value)
    }

    fn parse_unary(&mut self) -> Option<f64> {
        let mut negative = false;
        while let Some(sign @ (b'+' | b'-')) = self.peek() {
            self.pos += 1;
            if sign == b'-' {
                negative = !negative;
            }
        }
        let value = self.parse_number()?;
        Some(if negative { -value } else { value })
    }

    fn parse_number(&mut self) -> Option<f64> {
        let start = self.pos;
        let mut int_digits = 0;
        let mut frac_digits = 0;

        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
            int_digits += 1;
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
                frac_digits += 1;
            }
        }

        if int_digits == 0 && frac_digits == 0 {
            return None;
        }

        std::str::from_utf8(&self.input[start..self.pos])
            .ok()?
            .parse::<f64>()
            .ok()
    }
}

/// 計算結果を表示用の最短表記に整形する（例: `7`、`0.5`）
pub fn format_result(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_documented_cases() {
        assert_eq!(evaluate_expression("12+8*"), 0.0);
        assert_eq!(evaluate_expression(""), 0.0);
        assert_eq!(evaluate_expression("3.5*2"), 7.0);
    }

    #[test]
    fn test_precedence_and_associativity() {
        assert_eq!(evaluate_expression("2+3*4"), 14.0);
        assert_eq!(evaluate_expression("10-4-3"), 3.0);
        assert_eq!(evaluate_expression("100/10/2"), 5.0);
        assert_eq!(evaluate_expression("1+2*3-4/2"), 5.0);
    }

    #[test]
    fn test_unary_signs() {
        assert_eq!(evaluate_expression("-5+2"), -3.0);
        assert_eq!(evaluate_expression("3*-2"), -6.0);
        assert_eq!(evaluate_expression("4-+1"), 3.0);
        assert_eq!(evaluate_expression("1--2"), 0.0);
        assert_eq!(evaluate_expression("++1"), 0.0);
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate_expression(".5*4"), 2.0);
        assert_eq!(evaluate_expression("5.+1"), 6.0);
        assert_eq!(evaluate_expression("1.2.3"), 0.0);
        assert_eq!(evaluate_expression("."), 0.0);
    }

    #[test]
    fn test_non_finite_results_are_zero() {
        assert_eq!(evaluate_expression("1/0"), 0.0);
        assert_eq!(evaluate_expression("0/0"), 0.0);
        assert_eq!(evaluate_expression("-1/0"), 0.0);
    }

    #[test]
    fn test_disallowed_characters_are_ignored() {
        assert_eq!(evaluate_expression("1 000 + 2"), 1002.0);
        assert_eq!(evaluate_expression("alert(1)"), 1.0);
        assert_eq!(evaluate_expression("¥1,200"), 1200.0);
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(7.0), "7");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(-12.25), "-12.25");
    }

    #[quickcheck]
    fn prop_never_panics_and_is_finite(input: String) -> bool {
        evaluate_expression(&input).is_finite()
    }

    #[quickcheck]
    fn prop_integer_literal_evaluates_to_itself(n: u32) -> bool {
        evaluate_expression(&n.to_string()) == f64::from(n)
    }

    #[quickcheck]
    fn prop_addition_of_small_integers(a: u16, b: u16) -> bool {
        evaluate_expression(&format!("{a}+{b}")) == f64::from(a) + f64::from(b)
    }

    #[quickcheck]
    fn prop_trailing_operator_is_zero(n: u16, op: u8) -> bool {
        let op = ['+', '-', '*', '/'][usize::from(op % 4)];
        evaluate_expression(&format!("{n}{op}")) == 0.0
    }
}
