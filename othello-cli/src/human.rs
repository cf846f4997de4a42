//! 终端人类玩家

use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, StdinLock, Stdout, Write};

use othello_ai::Decider;
use othello_core::{Board, Color, Coordinate, Notation};

/// 按行读取的输入源
///
/// 标准输入每读一行加锁一次，多个玩家可以共用同一个终端。
pub trait LineInput {
    /// 读取一行（含换行符），返回 0 表示输入结束
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineInput for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl LineInput for StdinLock<'_> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineInput for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineInput for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// 从输入流读取坐标记法（如 "D3"）的玩家
///
/// 无法解析或不合法的输入会重新提示，输入结束视为停一手。
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<Stdin, Stdout> {
    /// 使用标准输入输出
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin(), io::stdout())
    }
}

impl<R: LineInput, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// 取回输出流
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, board: &Board, color: Color) -> io::Result<Option<Coordinate>> {
        if !board.has_valid_move(color) {
            writeln!(self.output, "{} ({}) 无子可下，停一手", self.name, color)?;
            return Ok(None);
        }

        write!(self.output, "{}", Notation::render(board, Some(color)))?;
        loop {
            write!(self.output, "{} ({}) > ", self.name, color)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match Notation::parse(line.trim(), board.size()) {
                Ok(coord) if board.is_legal_move(color, coord) => return Ok(Some(coord)),
                Ok(coord) => writeln!(self.output, "{} 不能落子", Notation::to_notation(coord))?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

impl<R: LineInput, W: Write> Decider for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, board: &Board, color: Color) -> Option<Coordinate> {
        match self.prompt(board, color) {
            Ok(mv) => mv,
            Err(e) => {
                tracing::warn!("{} 读取输入失败: {}", self.name, e);
                None
            }
        }
    }
}
